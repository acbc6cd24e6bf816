//! Create the hero schema without starting the server

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use herodeck_server::db::{create_pool, ensure_schema};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database file
    #[arg(long, env = "HERODECK_DATABASE", default_value = "database.db")]
    pub database: PathBuf,
}

/// Ensure the schema exists. Running it again is a no-op.
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = create_pool(&args.database)
        .await
        .with_context(|| format!("Failed to open database {}", args.database.display()))?;

    ensure_schema(&pool)
        .await
        .context("Failed to create hero schema")?;
    pool.close().await;

    println!("Schema ready in {}", args.database.display());
    Ok(())
}
