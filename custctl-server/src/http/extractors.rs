//! Custom Axum extractors
//!
//! Both reject with `ApiError::Validation`, so every malformed request is
//! answered with the same 400 JSON shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::models::{CustomerId, ValidationError};
use super::error::ApiError;

/// Extract and validate a customer id from path
pub struct ValidCustomerId(pub CustomerId);

impl<S> FromRequestParts<S> for ValidCustomerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidId { value: String::new() }))?;

        let id = raw.parse::<CustomerId>()?;
        Ok(Self(id))
    }
}

/// JSON body whose decoding failures become 400 responses
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
