//! custctl CLI - customer records service
//!
//! - `serve`: run the HTTP API over the customers table
//! - `migrate`: create the customers table and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::migrate::MigrateArgs;
use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "custctl",
    author,
    version,
    about = "Customer records over HTTP, backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the customer API
    Serve(ServeArgs),

    /// Create the customers table if missing
    Migrate(MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Values from .env act as environment defaults; a missing file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
    };

    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}
