//! Login, registration, and session handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthService;
use crate::error::Result;
use crate::middleware::auth::CurrentSession;
use crate::middleware::session::{clear_session_cookie, session_cookie};
use crate::state::AppState;

/// Login / registration payload.
#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` - create a member account.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse> {
    let user = AuthService::new(state.pool())
        .register(&payload.email, &payload.password)
        .await?;

    tracing::info!(user_id = %user.id, "member registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "user": user })),
    ))
}

/// `POST /api/auth/login` - verify credentials and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse> {
    let (user, token) = AuthService::new(state.pool())
        .login(state.tokens(), &payload.email, &payload.password)
        .await?;

    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user.id.to_string()),
            email: Some(user.email.to_string()),
            ..Default::default()
        }));
    });
    tracing::info!(user_id = %user.id, role = %user.role, "login");

    let jar = jar.add(session_cookie(token, state.config().is_secure()));
    Ok((
        jar,
        Json(json!({ "success": true, "user": user, "home": user.role.home_path() })),
    ))
}

/// `POST /api/auth/logout` - clear the session cookie.
///
/// Stateless sessions mean logout is purely client-side cookie removal;
/// outstanding tokens lapse at their expiry.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    sentry::configure_scope(|scope| scope.set_user(None));
    let jar = jar.remove(clear_session_cookie());
    (jar, Json(json!({ "success": true })))
}

/// `GET /api/auth/me` - the caller's session decision, for client-side state.
pub async fn me(CurrentSession(decision): CurrentSession) -> impl IntoResponse {
    match decision.identity() {
        Some(identity) => Json(json!({
            "isAuth": true,
            "role": identity.role,
            "userId": identity.user_id,
        })),
        None => Json(json!({ "isAuth": false })),
    }
}
