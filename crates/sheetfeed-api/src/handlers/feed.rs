//! Homepage feed handler.
//!
//! Fetches the configured sheet's CSV export, decodes it, and projects it
//! through the active policy. Every request triggers a fresh upstream
//! fetch; concurrent requests each fetch independently.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sheetfeed_core::{decode, project};
use tracing::{error, info, instrument};

use crate::AppState;

/// Error response body for feed failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable error label for the frontend.
    pub error: String,
    /// Human-readable failure description.
    pub message: String,
}

/// Serves the projected feed for the configured sheet.
///
/// # Errors
///
/// Responds 500 with an `{error, message}` body when every candidate
/// export URL fails; the `message` explains the sharing settings the
/// sheet needs.
#[instrument(
    name = "homepage_feed",
    skip(state),
    fields(sheet_id = %state.sheet_id, policy = ?state.policy)
)]
pub async fn homepage_feed(State(state): State<AppState>) -> Response {
    info!("Fetching homepage feed from central sheet");

    // Spawned so an inbound disconnect does not abort the in-flight
    // upstream call.
    let client = state.client.clone();
    let sheet_id = state.sheet_id.clone();
    let fetch = tokio::spawn(async move { client.fetch_csv(&sheet_id).await });

    let csv = match fetch.await {
        Ok(Ok(csv)) => csv,
        Ok(Err(e)) => {
            error!(error = %e, "Failed to fetch sheet export");
            return create_error_response(e.to_string());
        },
        Err(e) => {
            error!(error = %e, "Sheet fetch task failed");
            return create_error_response(e.to_string());
        },
    };

    let table = decode(&csv);
    info!(headers = table.headers.len(), rows = table.rows.len(), "Sheet decoded");

    let feed = project(state.policy, &table);
    (StatusCode::OK, Json(feed)).into_response()
}

/// Builds the 500 response body shared by all feed failures.
fn create_error_response(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: "Failed to fetch homepage feed".to_string(), message }),
    )
        .into_response()
}
