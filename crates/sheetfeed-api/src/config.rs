//! Configuration management for the sheet feed service.

use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sheetfeed_core::ProjectionPolicy;
use sheetfeed_fetch::ClientConfig;

const CONFIG_FILE: &str = "config.toml";

/// Complete service configuration with defaults, file, and environment
/// overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables (highest priority)
/// 2. Configuration file (`config.toml`)
/// 3. Built-in defaults (lowest priority)
///
/// The service works out-of-the-box against the default community sheet.
/// Use `CENTRAL_SHEET_ID` to point it at another spreadsheet and `PORT` to
/// change the listening port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Sheet
    /// Identifier of the source spreadsheet.
    ///
    /// Environment variable: `CENTRAL_SHEET_ID`
    #[serde(
        default = "default_sheet_id",
        alias = "CENTRAL_SHEET_ID",
        alias = "central_sheet_id"
    )]
    pub sheet_id: String,

    // Server
    /// Server bind address.
    ///
    /// Environment variable: `HOST`
    #[serde(default = "default_host", alias = "HOST")]
    pub host: String,
    /// Server bind port.
    ///
    /// Environment variable: `PORT`
    #[serde(default = "default_port", alias = "PORT")]
    pub port: u16,
    /// Inbound HTTP request timeout in seconds.
    ///
    /// Environment variable: `REQUEST_TIMEOUT`
    #[serde(default = "default_request_timeout", alias = "REQUEST_TIMEOUT")]
    pub request_timeout: u64,

    // Fetch
    /// Timeout for each outbound export request in seconds.
    ///
    /// Environment variable: `FETCH_TIMEOUT_SECONDS`
    #[serde(default = "default_fetch_timeout", alias = "FETCH_TIMEOUT_SECONDS")]
    pub fetch_timeout_seconds: u64,

    // Projection
    /// Active feed projection policy (`items` or `homepage`).
    ///
    /// Environment variable: `PROJECTION`
    #[serde(default = "default_projection", alias = "PROJECTION")]
    pub projection: ProjectionPolicy,

    // Static files
    /// Directory served for non-API routes.
    ///
    /// Environment variable: `STATIC_DIR`
    #[serde(default = "default_static_dir", alias = "STATIC_DIR")]
    pub static_dir: PathBuf,

    // Logging
    /// Log level configuration.
    ///
    /// Environment variable: `RUST_LOG`
    #[serde(default = "default_log_level", alias = "RUST_LOG")]
    pub rust_log: String,
}

impl Config {
    /// Load configuration from defaults, config file, and environment
    /// variable overrides.
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(""));

        let config: Self = figment.extract().context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to the fetch crate's client configuration.
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.fetch_timeout_seconds),
            ..ClientConfig::default()
        }
    }

    /// Parse server socket address from host and port configuration.
    pub fn parse_server_addr(&self) -> Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.host, self.port);
        SocketAddr::from_str(&addr_str).context("Invalid server address")
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.sheet_id.trim().is_empty() {
            anyhow::bail!("sheet_id must not be empty");
        }

        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        if self.fetch_timeout_seconds == 0 {
            anyhow::bail!("fetch_timeout_seconds must be greater than 0");
        }

        if self.request_timeout == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: default_sheet_id(),
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            fetch_timeout_seconds: default_fetch_timeout(),
            projection: default_projection(),
            static_dir: default_static_dir(),
            rust_log: default_log_level(),
        }
    }
}

fn default_sheet_id() -> String {
    // Community sheet served when no override is configured.
    "1PaqcX2BSypJjLBDMA3DnlAxCHK5y0TWMSbCIkTScIQU".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_fetch_timeout() -> u64 {
    sheetfeed_fetch::DEFAULT_TIMEOUT_SECONDS
}

fn default_projection() -> ProjectionPolicy {
    ProjectionPolicy::Items
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_log_level() -> String {
    "info".to_string()
}
