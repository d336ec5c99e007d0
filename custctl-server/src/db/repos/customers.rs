//! Customer repository
//!
//! Each operation is one autocommit statement:
//! - list: full scan ordered by id
//! - find: `Option` distinguishes absent from error
//! - update: zero affected rows surfaces as `DbError::NotFound`
//! - delete: idempotent, reports affected rows

use sqlx::PgPool;

use crate::models::{Customer, CustomerFields, CustomerId};
use super::DbError;

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every customer. Unbounded, no pagination.
    pub async fn list(&self) -> Result<Vec<Customer>, DbError> {
        let customers: Vec<Customer> = sqlx::query_as(
            r#"
            SELECT id, name, email, status
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }

    /// Get a single customer by id.
    ///
    /// Returns None if no row matches.
    pub async fn find(&self, id: CustomerId) -> Result<Option<Customer>, DbError> {
        let customer: Option<Customer> = sqlx::query_as(
            r#"
            SELECT id, name, email, status
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool)
        .await?;

        Ok(customer)
    }

    /// Insert a customer, returning the stored row with its generated id.
    pub async fn create(&self, fields: &CustomerFields) -> Result<Customer, DbError> {
        let customer: Customer = sqlx::query_as(
            r#"
            INSERT INTO customers (name, email, status)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, status
            "#,
        )
        .bind(fields.name.as_deref())
        .bind(fields.email.as_deref())
        .bind(fields.status.as_deref())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = customer.id, "customer created");
        Ok(customer)
    }

    /// Overwrite all mutable fields of an existing customer.
    pub async fn update(
        &self,
        id: CustomerId,
        fields: &CustomerFields,
    ) -> Result<Customer, DbError> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = $2, email = $3, status = $4
            WHERE id = $1
            RETURNING id, name, email, status
            "#,
        )
        .bind(id.get())
        .bind(fields.name.as_deref())
        .bind(fields.email.as_deref())
        .bind(fields.status.as_deref())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "customer",
            id: id.to_string(),
        })
    }

    /// Delete a customer by id (idempotent). Returns rows affected.
    pub async fn delete(&self, id: CustomerId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.get())
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
