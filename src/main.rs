//! Sheet feed service.
//!
//! Main entry point for the sheetfeed server. Initializes logging, loads
//! configuration, and serves the feed API until shutdown.

use anyhow::{Context, Result};
use sheetfeed_api::{start_server, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with structured logging
    init_tracing();

    info!("Starting sheetfeed service");

    // Load configuration from environment
    let config = Config::load()?;
    info!(
        sheet_id = %config.sheet_id,
        projection = ?config.projection,
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    let state = AppState::from_config(&config).context("failed to build application state")?;
    let addr = config.parse_server_addr()?;

    info!(addr = %addr, "sheetfeed is ready to serve the feed");
    start_server(state, addr).await.context("server failed")?;

    info!("sheetfeed shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,sheetfeed=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true).with_file(true).with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
