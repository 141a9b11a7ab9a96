//! Health check handlers for service monitoring.
//!
//! The service holds no connections or state of its own, so these are
//! liveness probes: they report that the HTTP server is responding without
//! touching the upstream sheet.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

/// Health check response structure.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Timestamp when the check was performed.
    pub timestamp: DateTime<Utc>,
    /// Service name.
    pub service: &'static str,
    /// Service version information.
    pub version: &'static str,
}

/// Primary health check endpoint.
///
/// Designed to be called frequently by orchestration systems and load
/// balancers; it performs no upstream fetches.
#[instrument(name = "health_check")]
pub async fn health_check() -> Response {
    debug!("Performing health check");

    let response = HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        service: "sheetfeed-api",
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Liveness check endpoint for orchestration probes.
#[instrument(name = "liveness_check")]
pub async fn liveness_check() -> Response {
    health_check().await
}
