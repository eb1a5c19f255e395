//! HTTP server command
//!
//! Runs the identview HTTP server: `/health` plus the `/api/ident` routes.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use identview_core::CacheConfig;
use identview_server::db::create_pool;
use identview_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Path to the iDent cache database (overrides environment)
    #[arg(long, env = "IDENT_DB_PATH")]
    pub db_path: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Resolve cache path from args or environment
    let config = match args.db_path {
        Some(path) => CacheConfig::with_path(path),
        None => CacheConfig::from_env()?,
    };

    tracing::info!("Starting identview server on {}", args.bind);

    // Open the cache read-only; fails fast on a missing file
    let pool = create_pool(&config.db_path).await.with_context(|| {
        format!(
            "Failed to open cache database {}",
            config.db_path.display()
        )
    })?;

    let server_config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, server_config).await.context("Server error")?;

    Ok(())
}
