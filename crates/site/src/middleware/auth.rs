//! Authentication extractors.
//!
//! Three extractors cover the two consumption patterns of the session gate:
//!
//! - [`CurrentSession`] - infallible, page-side: the handler gets the full
//!   [`SessionDecision`] and feeds it to `decide_redirect`
//! - [`RequireApiAuth`] - strict, API-side: missing token is 401, rejected
//!   token is 403, both with a `{status, statusText}` JSON body
//! - [`RequireAdminApi`] - strict plus an admin role check (mismatch is 403)
//!
//! The resolved identity is also inserted into request extensions so layered
//! handlers can pick it up without re-verifying.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use kedai_core::Role;

use crate::auth::{GateError, SessionDecision, SessionIdentity};
use crate::error::status_body;
use crate::middleware::session::SESSION_COOKIE_NAME;
use crate::state::AppState;

/// Extractor for the page-side session decision.
///
/// Never rejects; an absent or invalid token simply yields
/// [`SessionDecision::Anonymous`].
///
/// # Example
///
/// ```rust,ignore
/// async fn member_page(CurrentSession(decision): CurrentSession) -> Response {
///     match decide_redirect(&decision, RouteAccess::Role(Role::Member)) {
///         Access::Proceed => render(),
///         Access::Redirect(path) => Redirect::to(path).into_response(),
///     }
/// }
/// ```
pub struct CurrentSession(pub SessionDecision);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let decision = state.sessions().verify_session(session_token(parts).as_deref());
        if let Some(identity) = decision.identity() {
            parts.extensions.insert(identity);
        }
        Ok(Self(decision))
    }
}

/// Rejection carrying the gate failure, mapped to 401/403.
pub struct ApiAuthRejection(GateError);

impl IntoResponse for ApiAuthRejection {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GateError::MissingToken => StatusCode::UNAUTHORIZED,
            GateError::RejectedToken(_) => StatusCode::FORBIDDEN,
        };
        (status, status_body(status)).into_response()
    }
}

/// Extractor that requires a verified identity on an API route.
pub struct RequireApiAuth(pub SessionIdentity);

impl<S> FromRequestParts<S> for RequireApiAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiAuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let identity = state
            .sessions()
            .verify_token_strict(session_token(parts).as_deref())
            .map_err(ApiAuthRejection)?;
        parts.extensions.insert(identity);
        Ok(Self(identity))
    }
}

/// Rejection for admin-gated API routes.
pub enum AdminApiRejection {
    /// The base gate failed.
    Gate(GateError),
    /// Authenticated, but not an admin.
    NotAdmin,
}

impl IntoResponse for AdminApiRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Gate(err) => ApiAuthRejection(err).into_response(),
            Self::NotAdmin => {
                let status = StatusCode::FORBIDDEN;
                (status, status_body(status)).into_response()
            }
        }
    }
}

/// Extractor that requires a verified admin identity on an API route.
pub struct RequireAdminApi(pub SessionIdentity);

impl<S> FromRequestParts<S> for RequireAdminApi
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AdminApiRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireApiAuth(identity) = RequireApiAuth::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AdminApiRejection::Gate(rejection.0))?;

        if identity.role != Role::Admin {
            return Err(AdminApiRejection::NotAdmin);
        }
        Ok(Self(identity))
    }
}

/// Read the raw session token from the `session` cookie, if present.
fn session_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}
