//! Page-level handlers.
//!
//! Rendering proper is handled by the front end; these handlers own the
//! session gating. Each one asks `decide_redirect` what to do and either
//! serves the page payload or performs the redirect the gate decided.

use axum::{
    Json,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use kedai_core::Role;

use crate::auth::{Access, RouteAccess, decide_redirect};
use crate::middleware::auth::CurrentSession;

/// Serve the page payload or perform the decided redirect.
fn gate(decision: &crate::auth::SessionDecision, access: RouteAccess, page: Response) -> Response {
    match decide_redirect(decision, access) {
        Access::Proceed => page,
        Access::Redirect(path) => Redirect::to(path).into_response(),
    }
}

/// `GET /` - landing page, open to everyone.
pub async fn home() -> impl IntoResponse {
    Json(json!({ "page": "home" }))
}

/// `GET /login` - anonymous only; logged-in users go to their home area.
pub async fn login_page(CurrentSession(decision): CurrentSession) -> Response {
    gate(
        &decision,
        RouteAccess::AnonymousOnly,
        Json(json!({ "page": "login" })).into_response(),
    )
}

/// `GET /member` - member dashboard.
pub async fn member_home(CurrentSession(decision): CurrentSession) -> Response {
    let page = Json(json!({
        "page": "member",
        "role": decision.role(),
    }))
    .into_response();
    gate(&decision, RouteAccess::Role(Role::Member), page)
}

/// `GET /admin` - admin dashboard.
pub async fn admin_home(CurrentSession(decision): CurrentSession) -> Response {
    let page = Json(json!({
        "page": "admin",
        "role": decision.role(),
    }))
    .into_response();
    gate(&decision, RouteAccess::Role(Role::Admin), page)
}
