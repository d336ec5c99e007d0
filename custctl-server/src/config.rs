//! Server configuration
//!
//! Resolved values only. Reading flags and environment variables is the
//! CLI's job; this module owns the defaults and the `PORT` parsing rules.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Deadline applied to each database operation.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid listen address '{value}': expected PORT, :PORT or HOST:PORT")]
    InvalidListenAddr { value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,

    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// Pool size
    pub max_connections: u32,

    /// Per-operation database deadline
    pub request_timeout: Duration,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,
}

impl ServerConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            cors_permissive: false,
        }
    }
}

/// Parse a `PORT` value into a bind address.
///
/// Accepts `8080`, `:8080` (all interfaces), `127.0.0.1:8080` and
/// `[::1]:8080`. An empty value falls back to [`DEFAULT_PORT`].
pub fn parse_listen_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    let trimmed = value.trim();
    let invalid = || ConfigError::InvalidListenAddr {
        value: value.to_owned(),
    };
    let any_host = |port: u16| SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);

    if trimmed.is_empty() {
        return Ok(any_host(DEFAULT_PORT));
    }

    if let Some(port) = trimmed.strip_prefix(':') {
        return port.parse::<u16>().map(any_host).map_err(|_| invalid());
    }

    if let Ok(port) = trimmed.parse::<u16>() {
        return Ok(any_host(port));
    }

    trimmed.parse::<SocketAddr>().map_err(|_| invalid())
}
