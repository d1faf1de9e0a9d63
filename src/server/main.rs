//! HTTP server for redlining map queries.
//!
//! Loads the feature collection at startup and serves bounding box and
//! keyword filters plus user pins.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use redline::api::{router, AppState};
use redline::config::Config;
use redline::pins::MemoryPinStore;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Redlining map query server")]
struct Args {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Feature collection JSON file (overrides config)
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("redline=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    }
    .with_overrides(args.listen, args.data);

    info!("Redline Query Server");

    // Startup aborts if the data cannot be loaded
    let collection = redline::load(&config.data.path).with_context(|| {
        format!(
            "Failed to load feature collection from {}",
            config.data.path.display()
        )
    })?;

    let state = Arc::new(AppState::new(collection, Arc::new(MemoryPinStore::new())));
    let app = router(state);

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
