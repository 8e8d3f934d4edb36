//! Session cookie configuration.
//!
//! The session is a signed token in a single cookie; there is no server-side
//! session store. Cookie attributes follow the usual hardening set: HttpOnly,
//! SameSite Lax, Secure when the site is served over HTTPS. The cookie has
//! no explicit max-age; the token's own expiry bounds its validity.

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "session";

/// Build the session cookie carrying a freshly issued token.
#[must_use]
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(secure);
    cookie
}

/// The cookie to remove on logout.
///
/// Handed to `CookieJar::remove`, which turns it into an expired cookie with
/// the matching path.
#[must_use]
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::from(SESSION_COOKIE_NAME);
    cookie.set_path("/");
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok".to_string(), true);
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_session_cookie_insecure_for_local_http() {
        let cookie = session_cookie("tok".to_string(), false);
        assert_eq!(cookie.secure(), Some(false));
    }
}
