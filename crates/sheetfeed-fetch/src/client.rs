//! HTTP client for public sheet exports.
//!
//! Tries each candidate export URL sequentially with a fixed per-request
//! timeout, follows at most one redirect per candidate by hand, and sniffs
//! HTML bodies that indicate the sheet is not actually public. The first
//! success wins; later candidates are never attempted.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, warn, Instrument};

use crate::{
    error::{ErrorCategory, FetchError, Result},
    urls::{candidate_urls, DEFAULT_EXPORT_BASE},
    DEFAULT_TIMEOUT_SECONDS,
};

/// Configuration for the sheet export client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Timeout applied to every outbound request.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Base URL of the export endpoints; overridable for tests.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: "Sheetfeed/1.0".to_string(),
            base_url: DEFAULT_EXPORT_BASE.to_string(),
        }
    }
}

/// HTTP client for fetching public sheet exports.
///
/// Redirects are disabled on the underlying client so the one-level
/// follow policy is enforced by hand: a redirect on the follow-up response
/// is not chased and fails that candidate.
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl SheetClient {
    /// Creates a new sheet client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Configuration` if the HTTP client cannot be
    /// built with the provided settings.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| {
                FetchError::configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Creates a new sheet client with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Fetches the raw CSV export for a sheet.
    ///
    /// Candidate URLs are tried strictly sequentially; per-candidate
    /// failures are logged and swallowed. Only total exhaustion is
    /// returned, as a single aggregated error.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::CandidatesExhausted` when every candidate URL
    /// fails with a network error, timeout, non-200 status, or an HTML
    /// body.
    pub async fn fetch_csv(&self, sheet_id: &str) -> Result<String> {
        let candidates = candidate_urls(&self.config.base_url, sheet_id);
        let attempts = candidates.len();

        let span = info_span!("sheet_fetch", sheet_id = %sheet_id);
        async move {
            for url in &candidates {
                match self.try_candidate(url).await {
                    Ok(body) => {
                        debug!(url = %url, bytes = body.len(), "Sheet export fetched");
                        return Ok(body);
                    },
                    Err(e) => {
                        warn!(
                            url = %url,
                            category = %ErrorCategory::from(&e),
                            error = %e,
                            "Candidate export URL failed"
                        );
                    },
                }
            }

            Err(FetchError::candidates_exhausted(attempts))
        }
        .instrument(span)
        .await
    }

    /// Attempts a single candidate URL.
    ///
    /// Follows at most one redirect; the follow-up response is
    /// authoritative whatever its status. Bodies that look like HTML
    /// documents fail the candidate even on a 200.
    async fn try_candidate(&self, url: &str) -> Result<String> {
        let response = self.send(url).await?;

        let response = match redirect_location(&response) {
            Some(location) => {
                let target = response.url().join(&location).map_err(|e| {
                    FetchError::network(format!("invalid redirect location {location:?}: {e}"))
                })?;
                debug!(location = %target, "Following redirect");
                self.send(target.as_str()).await?
            },
            None => response,
        };

        // A redirect on the follow-up lands here as a non-200 status.
        if response.status() != reqwest::StatusCode::OK {
            return Err(FetchError::upstream_status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(format!("failed to read response body: {e}")))?;

        if looks_like_html(&body) {
            return Err(FetchError::NotPubliclyAccessible);
        }

        Ok(body)
    }

    /// Issues one GET request, mapping transport failures to fetch errors.
    async fn send(&self, url: &str) -> Result<reqwest::Response> {
        self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout(self.config.timeout.as_secs())
            } else if e.is_connect() {
                FetchError::network(format!("connection failed: {e}"))
            } else {
                FetchError::network(e.to_string())
            }
        })
    }
}

/// Returns the `Location` target when the response is a redirect the
/// fetcher follows (301, 302, 307, 308).
fn redirect_location(response: &reqwest::Response) -> Option<String> {
    if !matches!(response.status().as_u16(), 301 | 302 | 307 | 308) {
        return None;
    }
    response
        .headers()
        .get(reqwest::header::LOCATION)?
        .to_str()
        .ok()
        .map(str::to_string)
}

/// Case-sensitive HTML document sniff on the body's leading content.
///
/// A sheet that is not shared publicly answers with a login or error page
/// instead of CSV.
fn looks_like_html(body: &str) -> bool {
    let head = body.trim_start();
    head.starts_with("<!DOCTYPE") || head.starts_with("<html")
}
