//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C, then pool close

use std::sync::Arc;
use std::time::Duration;

use axum::http::{request::Parts, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::db::{create_pool_with_options, ensure_schema};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Deadline for each repository call
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(pool: PgPool, request_timeout: Duration) -> Self {
        Self {
            pool,
            request_timeout,
        }
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _: &Parts| {
                is_local_origin(origin)
            }))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::customers::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Connect, ensure the schema, then serve until a shutdown signal.
///
/// Connection and schema failures are returned before anything is bound.
///
/// # Example
///
/// ```ignore
/// let config = ServerConfig::new(database_url);
/// run_server(config).await?;
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let pool = create_pool_with_options(
        &config.database_url,
        config.max_connections,
        config.request_timeout,
    )
    .await?;
    tracing::info!(max_connections = config.max_connections, "Database pool ready");

    ensure_schema(&pool).await?;

    let state = AppState::new(pool.clone(), config.request_timeout);
    let app = build_router(state, config.cors_permissive);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    served.map_err(ServerError::from)
}

/// Origins allowed without `--cors-permissive`.
fn is_local_origin(origin: &HeaderValue) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    let Some(authority) = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
    else {
        return false;
    };

    let host = if authority.starts_with('[') {
        authority.split_inclusive(']').next().unwrap_or(authority)
    } else {
        authority.split(':').next().unwrap_or(authority)
    };

    matches!(host, "localhost" | "127.0.0.1" | "[::1]")
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
