//! Check command - cache freshness at a glance
//!
//! Opens the cache read-only and prints per-table row counts and newest
//! timestamps. The terminal twin of `GET /api/ident/status`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use identview_core::records::{format_datetime, TableStats};
use identview_core::CacheConfig;
use identview_server::db::{cache_status, create_pool};
use identview_server::http::routes::status::StatusResponse;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the iDent cache database (overrides environment)
    #[arg(long, env = "IDENT_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Output as JSON (same shape as the /api/ident/status endpoint)
    #[arg(long)]
    pub json: bool,
}

/// Print cache status to stdout
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let config = match args.db_path {
        Some(path) => CacheConfig::with_path(path),
        None => CacheConfig::from_env()?,
    };

    let pool = create_pool(&config.db_path).await.with_context(|| {
        format!(
            "Failed to open cache database {}",
            config.db_path.display()
        )
    })?;

    let status = cache_status(&pool)
        .await
        .context("Failed to query cache tables")?;

    if args.json {
        let response = StatusResponse::from(status);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("cache: {}", config.db_path.display());
    print_row("patients", &status.patients);
    print_row("staffs", &status.staffs);
    print_row("scheduled_receptions", &status.scheduled_receptions);
    print_row("calls_cache", &status.calls_cache);
    print_row("online_tickets", &status.online_tickets);

    Ok(())
}

fn print_row(table: &str, stats: &TableStats) {
    let last = stats
        .last_dt
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string());
    println!("{table:<22} {:>8}  {last}", stats.count);
}
