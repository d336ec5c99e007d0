//! Schema-only command: create the customers table and exit

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use custctl_server::db::{create_pool_with_options, ensure_schema};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Ensure the customers table exists
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool_with_options(
        &args.db.database_url,
        args.db.max_connections,
        Duration::from_secs(10),
    )
    .await
    .context("Failed to create database pool")?;

    let result = ensure_schema(&pool)
        .await
        .context("Failed to create customers table");
    pool.close().await;
    result
}
