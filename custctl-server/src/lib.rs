//! custctl-server: HTTP service for customer records
//!
//! Five routes over one PostgreSQL table, plus a health check. The pool is
//! built once at startup and injected into handlers through axum state.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{parse_listen_addr, ConfigError, ServerConfig};
pub use http::{build_router, run_server, AppState, ServerError};
