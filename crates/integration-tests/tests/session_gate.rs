//! Integration tests for the API-side session gate.
//!
//! The strict gate must keep its two failure modes distinguishable at the
//! HTTP boundary: no token is 401, a present-but-rejected token is 403, both
//! with a `{status, statusText}` JSON body.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use kedai_core::Role;
use kedai_integration_tests::{body_json, foreign_token, get, issue_token, send, test_app};

// =============================================================================
// Missing vs rejected token
// =============================================================================

#[tokio::test]
async fn test_protected_route_without_cookie_is_401() {
    let response = send(test_app(), get("/api/orders/me", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["status"], 401);
    assert_eq!(body["statusText"], "Unauthorized");
}

#[tokio::test]
async fn test_protected_route_with_foreign_signature_is_403() {
    let token = foreign_token(7, Role::Member);
    let response = send(test_app(), get("/api/orders/me", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["status"], 403);
    assert_eq!(body["statusText"], "Forbidden");
}

#[tokio::test]
async fn test_protected_route_with_garbage_token_is_403() {
    let response = send(test_app(), get("/api/orders/me", Some("not-a-jwt"))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_reservations_require_an_account() {
    let response = send(test_app(), get("/api/reservations/me", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Admin gate
// =============================================================================

#[tokio::test]
async fn test_admin_route_without_cookie_is_401() {
    let response = send(test_app(), get("/api/admin/orders", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_member_token_is_403() {
    let token = issue_token(7, Role::Member);
    let response = send(test_app(), get("/api/admin/orders", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["status"], 403);
}

#[tokio::test]
async fn test_admin_route_with_rejected_token_is_403() {
    let token = foreign_token(1, Role::Admin);
    let response = send(test_app(), get("/api/admin/reservations", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// =============================================================================
// Session introspection
// =============================================================================

#[tokio::test]
async fn test_me_with_valid_token_reports_identity() {
    let token = issue_token(42, Role::Member);
    let response = send(test_app(), get("/api/auth/me", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["isAuth"], true);
    assert_eq!(body["role"], "member");
    assert_eq!(body["userId"], 42);
}

#[tokio::test]
async fn test_me_without_token_is_anonymous_not_an_error() {
    let response = send(test_app(), get("/api/auth/me", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["isAuth"], false);
}

#[tokio::test]
async fn test_me_with_broken_token_is_anonymous_not_an_error() {
    let token = foreign_token(42, Role::Admin);
    let response = send(test_app(), get("/api/auth/me", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["isAuth"], false);
}
