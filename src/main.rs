//! Incentive dashboard server.
//!
//! Loads `dashboard.yaml` from the configuration directory, opens the
//! configured entry store, and serves the dashboard API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use incentive_dashboard::api::{AppState, create_router};
use incentive_dashboard::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Incentive dashboard API server
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing dashboard.yaml
    #[arg(
        short,
        long,
        default_value = "./config",
        env = "DASHBOARD_CONFIG_DIR",
        value_name = "DIR"
    )]
    config: PathBuf,

    /// Address to listen on
    #[arg(
        short,
        long,
        default_value = "127.0.0.1:3000",
        env = "DASHBOARD_BIND"
    )]
    bind: SocketAddr,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    info!("incentive-dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = ConfigLoader::load(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;
    let state = AppState::initialize(&config)
        .await
        .context("Failed to open entry store")?;

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    info!(address = %args.bind, "Listening");

    axum::serve(listener, create_router(state))
        .await
        .context("Server error")?;

    Ok(())
}
