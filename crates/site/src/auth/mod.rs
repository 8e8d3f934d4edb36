//! Authentication and session authorization.
//!
//! Split in three layers:
//!
//! - [`token`] - the token-verification collaborator: signed `session` cookie
//!   claims, issue/verify behind the [`token::TokenVerifier`] seam
//! - [`gate`] - the per-request authorization decisions every page and API
//!   handler goes through
//! - [`service`] - credentials login/registration against the user repository

pub mod error;
pub mod gate;
pub mod service;
pub mod token;

pub use error::{AuthError, GateError, TokenError};
pub use gate::{
    Access, RouteAccess, SessionDecision, SessionIdentity, SessionService, decide_redirect,
};
pub use service::AuthService;
pub use token::{JwtTokenVerifier, SessionClaims, TokenVerifier};
