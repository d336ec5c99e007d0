//! Schema initializer for the customers table

use sqlx::PgPool;

/// DDL for the single `customers` table.
pub const CREATE_CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id SERIAL PRIMARY KEY,
    name TEXT,
    email TEXT,
    status TEXT
)
"#;

/// Ensure the customers table exists. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring customers table exists...");

    sqlx::query(CREATE_CUSTOMERS_TABLE).execute(pool).await?;

    tracing::info!("Schema ready");
    Ok(())
}
