//! HTTP server command
//!
//! Opens the hero database, loads templates and runs the server until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use herodeck_server::db::create_pool;
use herodeck_server::templates::Templates;
use herodeck_server::todos::{HttpTodoSource, DEFAULT_TODO_URL};
use herodeck_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "HERODECK_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// SQLite database file
    #[arg(long, env = "HERODECK_DATABASE", default_value = "database.db")]
    pub database: PathBuf,

    /// Directory with an index.html overriding the built-in template
    #[arg(long, env = "HERODECK_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long, env = "HERODECK_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Todo endpoint fetched on every home page view
    #[arg(long, env = "HERODECK_TODO_URL", default_value = DEFAULT_TODO_URL)]
    pub todo_url: String,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database = %args.database.display(), "Opening hero database");

    let pool = create_pool(&args.database)
        .await
        .with_context(|| format!("Failed to open database {}", args.database.display()))?;

    let templates = match &args.templates_dir {
        Some(dir) => Templates::from_dir(dir)
            .with_context(|| format!("Failed to load templates from {}", dir.display()))?,
        None => Templates::builtin().context("Failed to load built-in templates")?,
    };

    let todos = HttpTodoSource::new(args.todo_url);
    tracing::info!(todo_url = %todos.url(), "Todo source configured");

    let state = AppState::new(pool, templates, Arc::new(todos));
    let config = ServerConfig {
        bind_addr: args.bind,
        static_dir: args.static_dir,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
