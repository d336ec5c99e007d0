//! Customer endpoints
//!
//! One handler per route, each a single repository call under the
//! request deadline.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use crate::db::repos::CustomerRepo;
use crate::http::deadline::with_deadline;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidCustomerId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Customer, CustomerFields};

/// Acknowledgement body for DELETE
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /customers - list every customer
async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers =
        with_deadline(state.request_timeout, CustomerRepo::new(&state.pool).list()).await?;
    Ok(Json(customers))
}

/// GET /customers/{id} - get a single customer, `{}` when absent
async fn get_customer(
    State(state): State<Arc<AppState>>,
    ValidCustomerId(id): ValidCustomerId,
) -> Result<Response, ApiError> {
    let found =
        with_deadline(state.request_timeout, CustomerRepo::new(&state.pool).find(id)).await?;

    Ok(match found {
        Some(customer) => Json(customer).into_response(),
        None => Json(json!({})).into_response(),
    })
}

/// POST /customers - create a customer
async fn create_customer(
    State(state): State<Arc<AppState>>,
    ValidJson(fields): ValidJson<CustomerFields>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let repo = CustomerRepo::new(&state.pool);
    let customer = with_deadline(state.request_timeout, repo.create(&fields)).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /customers/{id} - replace all fields of a customer
async fn update_customer(
    State(state): State<Arc<AppState>>,
    ValidCustomerId(id): ValidCustomerId,
    ValidJson(fields): ValidJson<CustomerFields>,
) -> Result<Json<Customer>, ApiError> {
    let repo = CustomerRepo::new(&state.pool);
    let customer = with_deadline(state.request_timeout, repo.update(id, &fields)).await?;

    Ok(Json(customer))
}

/// DELETE /customers/{id} - delete a customer
///
/// Always acknowledges; a failed delete is only logged.
async fn delete_customer(
    State(state): State<Arc<AppState>>,
    ValidCustomerId(id): ValidCustomerId,
) -> Json<MessageResponse> {
    let repo = CustomerRepo::new(&state.pool);
    match with_deadline(state.request_timeout, repo.delete(id)).await {
        Ok(0) => tracing::debug!(%id, "delete matched no customer"),
        Ok(_) => tracing::debug!(%id, "customer deleted"),
        Err(e) => tracing::warn!(%id, error = ?e, "customer delete failed"),
    }

    Json(MessageResponse {
        message: "customer deleted",
    })
}

/// Customer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}
