//! Command implementations for custctl CLI

pub mod migrate;
pub mod serve;

use clap::Args;
use custctl_server::db::pool::DEFAULT_MAX_CONNECTIONS;

// Re-export dispatcher functions for flat access from main.rs
pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database options shared by every command that connects
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}
