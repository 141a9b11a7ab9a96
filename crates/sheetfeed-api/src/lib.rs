//! Sheet feed HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod server;

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use sheetfeed_core::ProjectionPolicy;
use sheetfeed_fetch::SheetClient;

pub use config::Config;
pub use server::{create_router, start_server};

/// Shared state handed to every request handler.
///
/// The sheet identifier and policy are read-only after startup; the client
/// holds a connection pool and clones cheaply.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Outbound export client.
    pub client: SheetClient,
    /// Identifier of the source spreadsheet.
    pub sheet_id: String,
    /// Active feed projection policy.
    pub policy: ProjectionPolicy,
    /// Directory served for non-API routes.
    pub static_dir: PathBuf,
    /// Inbound request timeout.
    pub request_timeout: Duration,
}

impl AppState {
    /// Builds application state from loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails when the outbound HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = SheetClient::new(config.to_client_config())
            .context("failed to build sheet export client")?;

        Ok(Self {
            client,
            sheet_id: config.sheet_id.clone(),
            policy: config.projection,
            static_dir: config.static_dir.clone(),
            request_timeout: Duration::from_secs(config.request_timeout),
        })
    }
}
