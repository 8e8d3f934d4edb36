//! Authentication and authorization error types.

use thiserror::Error;

use kedai_core::EmailError;

use crate::db::RepositoryError;

/// Why a session token failed verification.
///
/// The page-side gate collapses all of these to "anonymous"; only the strict
/// API gate surfaces them, and then only as a 403.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature check failed or the token is structurally not a JWT.
    #[error("invalid token")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// Token decoded but its claims are unusable (unknown role,
    /// non-numeric subject).
    #[error("invalid claims: {0}")]
    InvalidClaims(String),
}

/// Failure of the strict API gate.
///
/// The two variants stay distinguishable so the HTTP boundary can map them
/// to 401 and 403 respectively.
#[derive(Debug, Error)]
pub enum GateError {
    /// No `session` cookie was supplied at all.
    #[error("authentication required")]
    MissingToken,

    /// A token was supplied but verification rejected it.
    #[error("session token rejected")]
    RejectedToken(#[source] TokenError),
}

/// Errors from login and registration.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Session token could not be issued.
    #[error("token issuing error")]
    TokenIssue,
}
