//! Health endpoint tests.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use kedai_integration_tests::{body_text, get, send, test_app};

#[tokio::test]
async fn test_liveness_is_ok_without_database() {
    let response = send(test_app(), get("/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_reports_unavailable_without_database() {
    // The test pool points at a closed port, so the ping must fail.
    let response = send(test_app(), get("/health/ready", None)).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = send(test_app(), get("/api/nope", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
