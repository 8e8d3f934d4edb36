//! Per-request session authorization decisions.
//!
//! Every protected page and API route funnels through this module. Pages use
//! [`SessionService::verify_session`] plus [`decide_redirect`]; API routes
//! use [`SessionService::verify_token_strict`], whose failures stay
//! distinguishable (missing vs rejected token) for the 401/403 mapping at
//! the HTTP boundary.
//!
//! Decisions are values, never control flow: the gate returns what should
//! happen and the boundary performs the redirect or error response.

use std::sync::Arc;

use serde::Serialize;

use kedai_core::{Role, UserId};

use super::error::GateError;
use super::token::TokenVerifier;

/// Path of the login page, the redirect target for unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";

/// Identity decoded from a verified session token.
///
/// Owned by the request that decoded it; never cached across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionIdentity {
    pub user_id: UserId,
    pub role: Role,
}

/// Outcome of page-side session verification.
///
/// An authenticated decision always carries a role because the identity is
/// embedded in the variant; there is no `is_auth == true` without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionDecision {
    /// No token, or a token that failed verification.
    Anonymous,
    /// Token verified; identity attached.
    Authenticated(SessionIdentity),
}

impl SessionDecision {
    /// Whether the request carries a verified identity.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Role of the verified identity, if any.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(identity) => Some(identity.role),
        }
    }

    /// The verified identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<SessionIdentity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(identity) => Some(*identity),
        }
    }
}

/// What a route requires of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Only anonymous visitors (login/register pages).
    AnonymousOnly,
    /// Any verified identity, role irrelevant.
    AnyAuthenticated,
    /// A specific role.
    Role(Role),
}

/// What the boundary should do with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Serve the page.
    Proceed,
    /// Send the caller elsewhere.
    Redirect(&'static str),
}

/// The page-side decision table.
///
/// - logged-in users never see anonymous-only pages; they go to their role's
///   home area
/// - anonymous callers never see protected pages; they go to the login page
/// - a role mismatch goes to the caller's own home area, so an admin landing
///   on a member page ends up on the admin dashboard and vice versa
#[must_use]
pub fn decide_redirect(decision: &SessionDecision, access: RouteAccess) -> Access {
    match (access, decision) {
        (RouteAccess::AnonymousOnly, SessionDecision::Authenticated(identity)) => {
            Access::Redirect(identity.role.home_path())
        }
        (RouteAccess::AnonymousOnly, SessionDecision::Anonymous)
        | (RouteAccess::AnyAuthenticated, SessionDecision::Authenticated(_)) => Access::Proceed,
        (RouteAccess::AnyAuthenticated | RouteAccess::Role(_), SessionDecision::Anonymous) => {
            Access::Redirect(LOGIN_PATH)
        }
        (RouteAccess::Role(required), SessionDecision::Authenticated(identity)) => {
            if identity.role == required {
                Access::Proceed
            } else {
                Access::Redirect(identity.role.home_path())
            }
        }
    }
}

/// Session verification service.
///
/// Thin wrapper over the token-verification collaborator; cheaply cloneable
/// and shared through application state.
#[derive(Clone)]
pub struct SessionService {
    verifier: Arc<dyn TokenVerifier>,
}

impl SessionService {
    /// Create a service over a verifier implementation.
    #[must_use]
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Page-side verification: failure is data, not an error.
    ///
    /// An absent, malformed, expired, or tampered token all come back as
    /// [`SessionDecision::Anonymous`]; this never raises to the caller.
    #[must_use]
    pub fn verify_session(&self, token: Option<&str>) -> SessionDecision {
        let Some(token) = token else {
            return SessionDecision::Anonymous;
        };
        match self
            .verifier
            .verify(token)
            .and_then(|claims| claims.identity())
        {
            Ok(identity) => SessionDecision::Authenticated(identity),
            Err(err) => {
                tracing::debug!(error = %err, "session token rejected, treating as anonymous");
                SessionDecision::Anonymous
            }
        }
    }

    /// API-side verification with distinguishable failures.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::MissingToken`] when no token is supplied (maps
    /// to 401) and [`GateError::RejectedToken`] when a token is present but
    /// verification or claims resolution fails (maps to 403).
    pub fn verify_token_strict(&self, token: Option<&str>) -> Result<SessionIdentity, GateError> {
        let token = token.ok_or(GateError::MissingToken)?;
        self.verifier
            .verify(token)
            .and_then(|claims| claims.identity())
            .map_err(GateError::RejectedToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::error::TokenError;
    use crate::auth::token::SessionClaims;

    /// Stub collaborator: accepts `member:N` / `admin:N`, rejects the rest.
    struct StubVerifier;

    impl TokenVerifier for StubVerifier {
        fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
            let (role, id) = token
                .split_once(':')
                .ok_or_else(|| TokenError::InvalidClaims("bad stub token".to_string()))?;
            Ok(SessionClaims {
                sub: id.to_string(),
                role: role.to_string(),
                iat: 0,
                exp: i64::MAX,
            })
        }
    }

    fn service() -> SessionService {
        SessionService::new(Arc::new(StubVerifier))
    }

    fn member(id: i32) -> SessionDecision {
        SessionDecision::Authenticated(SessionIdentity {
            user_id: UserId::new(id),
            role: Role::Member,
        })
    }

    fn admin(id: i32) -> SessionDecision {
        SessionDecision::Authenticated(SessionIdentity {
            user_id: UserId::new(id),
            role: Role::Admin,
        })
    }

    #[test]
    fn test_verify_session_absent_token() {
        assert_eq!(service().verify_session(None), SessionDecision::Anonymous);
    }

    #[test]
    fn test_verify_session_valid_token_carries_role() {
        let decision = service().verify_session(Some("admin:5"));
        assert!(decision.is_auth());
        assert_eq!(decision.role(), Some(Role::Admin));
        assert_eq!(decision, admin(5));
    }

    #[test]
    fn test_verify_session_rejected_token_is_anonymous_not_error() {
        let decision = service().verify_session(Some("garbage"));
        assert_eq!(decision, SessionDecision::Anonymous);
        assert_eq!(decision.role(), None);
    }

    #[test]
    fn test_verify_strict_missing_token_is_distinct() {
        assert!(matches!(
            service().verify_token_strict(None),
            Err(GateError::MissingToken)
        ));
    }

    #[test]
    fn test_verify_strict_rejected_token_is_distinct() {
        assert!(matches!(
            service().verify_token_strict(Some("garbage")),
            Err(GateError::RejectedToken(_))
        ));
    }

    #[test]
    fn test_verify_strict_bad_claims_count_as_rejected() {
        // decodes fine but the role is unknown
        assert!(matches!(
            service().verify_token_strict(Some("owner:9")),
            Err(GateError::RejectedToken(TokenError::InvalidClaims(_)))
        ));
    }

    #[test]
    fn test_verify_strict_valid_token() {
        let identity = service()
            .verify_token_strict(Some("member:3"))
            .expect("valid");
        assert_eq!(identity.user_id, UserId::new(3));
        assert_eq!(identity.role, Role::Member);
    }

    #[test]
    fn test_redirect_authenticated_away_from_anonymous_pages() {
        assert_eq!(
            decide_redirect(&admin(1), RouteAccess::AnonymousOnly),
            Access::Redirect("/admin")
        );
        assert_eq!(
            decide_redirect(&member(1), RouteAccess::AnonymousOnly),
            Access::Redirect("/member")
        );
    }

    #[test]
    fn test_anonymous_proceeds_on_anonymous_pages() {
        assert_eq!(
            decide_redirect(&SessionDecision::Anonymous, RouteAccess::AnonymousOnly),
            Access::Proceed
        );
    }

    #[test]
    fn test_anonymous_redirected_to_login() {
        assert_eq!(
            decide_redirect(&SessionDecision::Anonymous, RouteAccess::AnyAuthenticated),
            Access::Redirect(LOGIN_PATH)
        );
        assert_eq!(
            decide_redirect(&SessionDecision::Anonymous, RouteAccess::Role(Role::Admin)),
            Access::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn test_matching_role_proceeds() {
        assert_eq!(
            decide_redirect(&member(2), RouteAccess::Role(Role::Member)),
            Access::Proceed
        );
        assert_eq!(
            decide_redirect(&admin(2), RouteAccess::Role(Role::Admin)),
            Access::Proceed
        );
        assert_eq!(
            decide_redirect(&member(2), RouteAccess::AnyAuthenticated),
            Access::Proceed
        );
    }

    #[test]
    fn test_role_mismatch_redirects_to_own_home() {
        assert_eq!(
            decide_redirect(&member(2), RouteAccess::Role(Role::Admin)),
            Access::Redirect("/member")
        );
        assert_eq!(
            decide_redirect(&admin(2), RouteAccess::Role(Role::Member)),
            Access::Redirect("/admin")
        );
    }
}
