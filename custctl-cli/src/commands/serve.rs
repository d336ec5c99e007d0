//! HTTP server command for the customer API

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use custctl_server::{parse_listen_addr, run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Listen port or address (8080, :8080, 127.0.0.1:8080)
    #[arg(long, short = 'p', env = "PORT", default_value = "8080")]
    pub port: String,

    /// Deadline for each database operation, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn into_config(self) -> Result<ServerConfig> {
        let bind_addr = parse_listen_addr(&self.port)?;

        let mut config = ServerConfig::new(self.db.database_url);
        config.bind_addr = bind_addr;
        config.max_connections = self.db.max_connections;
        config.request_timeout = Duration::from_secs(self.request_timeout_secs);
        config.cors_permissive = self.cors_permissive;
        Ok(config)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config().context("Invalid server configuration")?;

    tracing::info!("Starting custctl server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}
