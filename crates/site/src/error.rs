//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. Server-side faults are
//! captured to Sentry before responding; client-facing failures map to the
//! structured bodies the front end expects:
//!
//! - auth failures: `{"status": 401|403, "statusText": "..."}`
//! - validation failures: `{"success": false, "message": "..."}`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::auth::{AuthError, GateError};
use crate::db::RepositoryError;
use crate::models::ValidationError;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Login/registration failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// The strict session gate rejected the request.
    #[error("Gate error: {0}")]
    Gate(#[from] GateError),

    /// Malformed order/reservation/product payload.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Build the `{status, statusText}` body used by API auth failures.
#[must_use]
pub fn status_body(status: StatusCode) -> Json<serde_json::Value> {
    Json(json!({
        "status": status.as_u16(),
        "statusText": status.canonical_reason().unwrap_or("Error"),
    }))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry; a Conflict is the client's problem
        let is_server_fault = match &self {
            Self::Internal(_) => true,
            Self::Database(err) => !matches!(err, RepositoryError::Conflict(_)),
            _ => false,
        };
        if is_server_fault {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        match &self {
            Self::Database(RepositoryError::Conflict(what)) => (
                StatusCode::CONFLICT,
                Json(json!({ "success": false, "message": what })),
            )
                .into_response(),
            Self::Database(_) | Self::Internal(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, status_body(status)).into_response()
            }
            Self::Gate(err) => {
                let status = match err {
                    GateError::MissingToken => StatusCode::UNAUTHORIZED,
                    GateError::RejectedToken(_) => StatusCode::FORBIDDEN,
                };
                (status, status_body(status)).into_response()
            }
            Self::Auth(err) => {
                let status = match err {
                    AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                    AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                    AuthError::WeakPassword(_) | AuthError::InvalidEmail(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    AuthError::Repository(_) | AuthError::PasswordHash | AuthError::TokenIssue => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                let message = match err {
                    AuthError::InvalidCredentials => "Invalid credentials".to_string(),
                    AuthError::UserAlreadyExists => {
                        "An account with this email already exists".to_string()
                    }
                    AuthError::WeakPassword(msg) => msg.clone(),
                    AuthError::InvalidEmail(e) => e.to_string(),
                    _ => "Internal server error".to_string(),
                };
                (status, Json(json!({ "success": false, "message": message }))).into_response()
            }
            Self::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "success": false, "message": err.message })),
            )
                .into_response(),
            Self::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "success": false, "message": format!("{what} not found") })),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": msg })),
            )
                .into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenError;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_gate_errors_stay_distinguishable() {
        assert_eq!(
            get_status(AppError::Gate(GateError::MissingToken)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Gate(GateError::RejectedToken(
                TokenError::InvalidClaims("bad".to_string())
            ))),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_validation_maps_to_unprocessable() {
        let err = AppError::Validation(ValidationError::new("quantity must be at least 1"));
        assert_eq!(get_status(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_and_bad_request() {
        assert_eq!(
            get_status(AppError::NotFound("product".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("nope".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_repository_conflict_maps_to_409_not_500() {
        let err = AppError::Database(RepositoryError::Conflict(
            "product is referenced by existing orders".to_string(),
        ));
        assert_eq!(get_status(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_other_repository_errors_stay_500() {
        let err = AppError::Database(RepositoryError::Database(sqlx::Error::RowNotFound));
        assert_eq!(get_status(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_body_shape() {
        let Json(body) = status_body(StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], 401);
        assert_eq!(body["statusText"], "Unauthorized");
    }
}
