//! Request middleware: session cookie handling and auth extractors.

pub mod auth;
pub mod session;

pub use auth::{CurrentSession, RequireAdminApi, RequireApiAuth};
pub use session::{SESSION_COOKIE_NAME, clear_session_cookie, session_cookie};
