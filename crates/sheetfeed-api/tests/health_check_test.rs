//! Health check endpoint tests.
//!
//! Tests the `/health` and `/live` endpoints including response shape and
//! the request-id middleware. The service has no dependencies to probe, so
//! the checks must succeed without any upstream being reachable.

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::Value;
use sheetfeed_api::{create_router, AppState};
use sheetfeed_core::ProjectionPolicy;
use sheetfeed_fetch::SheetClient;
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState {
        client: SheetClient::with_defaults().expect("client should build"),
        sheet_id: "test-sheet".to_string(),
        policy: ProjectionPolicy::Items,
        static_dir: std::env::temp_dir(),
        request_timeout: Duration::from_secs(30),
    }
}

async fn get(uri: &str) -> axum::response::Response {
    let app = create_router(test_state());

    let request = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    app.oneshot(request).await.expect("failed to make request")
}

#[tokio::test]
async fn health_check_returns_success() {
    let response = get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let health: Value =
        serde_json::from_slice(&body_bytes).expect("health response should be valid JSON");

    assert_eq!(health["status"], "ok");
    assert_eq!(health["service"], "sheetfeed-api");
    assert!(health["timestamp"].is_string());
    assert!(!health["version"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn liveness_check_matches_health_check() {
    let response = get("/live").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body: Value =
        serde_json::from_slice(&body_bytes).expect("liveness response should be valid JSON");

    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn responses_carry_request_id_header() {
    let response = get("/health").await;

    let request_id = response
        .headers()
        .get("X-Request-Id")
        .expect("X-Request-Id header should be present")
        .to_str()
        .expect("header should be valid UTF-8");

    assert!(!request_id.is_empty());
}
