//! Request deadline for database operations

use std::future::Future;
use std::time::Duration;

use crate::db::repos::DbError;
use super::error::ApiError;

/// Run a repository call under `limit`, mapping expiry to `ApiError::Timeout`.
pub async fn with_deadline<F, T>(limit: Duration, operation: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, DbError>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(_) => Err(ApiError::Timeout {
            seconds: limit.as_secs(),
        }),
    }
}
