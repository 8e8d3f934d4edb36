//! Session token issue and verification.
//!
//! Sessions are stateless: a signed HS256 JWT carried in the `session`
//! cookie, holding the user id and role. Nothing is stored server-side, so
//! every request is independently verified and logout is just clearing the
//! cookie.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use kedai_core::{Role, UserId};

use super::error::{AuthError, TokenError};
use super::gate::SessionIdentity;

/// Session lifetime (7 days).
const SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Claims carried by every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the user's id, as a decimal string.
    pub sub: String,
    /// Wire spelling of the user's role (`member` / `admin`).
    pub role: String,
    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds).
    pub exp: i64,
}

impl SessionClaims {
    /// Resolve claims into a typed identity.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InvalidClaims` when the subject is not numeric
    /// or the role is not a known spelling.
    pub fn identity(&self) -> Result<SessionIdentity, TokenError> {
        let user_id: UserId = self
            .sub
            .parse()
            .map_err(|_| TokenError::InvalidClaims(format!("non-numeric subject: {}", self.sub)))?;
        let role = Role::parse(&self.role)
            .ok_or_else(|| TokenError::InvalidClaims(format!("unknown role: {}", self.role)))?;
        Ok(SessionIdentity { user_id, role })
    }
}

/// The token-verification collaborator.
///
/// The gate only depends on this trait, so tests can substitute a stub and
/// the signing scheme can change without touching authorization logic.
pub trait TokenVerifier: Send + Sync {
    /// Verify a raw token string and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` on any signature, expiry, or claims problem.
    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError>;
}

/// HS256 implementation of [`TokenVerifier`], also able to issue tokens.
pub struct JwtTokenVerifier {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    /// Build from the configured session secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // sub/role checked by SessionClaims::identity, not by the library
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    /// Issue a session token for a freshly authenticated user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenIssue` if encoding fails.
    pub fn issue(&self, user_id: UserId, role: Role) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(SESSION_TTL_SECONDS)).timestamp(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| AuthError::TokenIssue)
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier(secret: &str) -> JwtTokenVerifier {
        JwtTokenVerifier::new(&SecretString::from(secret.to_string()))
    }

    #[test]
    fn test_issue_then_verify_round_trip() {
        let v = verifier("0123456789abcdef0123456789abcdef");
        let token = v.issue(UserId::new(7), Role::Member).expect("issue");
        let claims = v.verify(&token).expect("verify");
        let identity = claims.identity().expect("identity");
        assert_eq!(identity.user_id, UserId::new(7));
        assert_eq!(identity.role, Role::Member);
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let issuer = verifier("0123456789abcdef0123456789abcdef");
        let other = verifier("fedcba9876543210fedcba9876543210");
        let token = issuer.issue(UserId::new(1), Role::Admin).expect("issue");
        assert!(matches!(other.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let v = verifier("0123456789abcdef0123456789abcdef");
        assert!(v.verify("not-a-jwt").is_err());
        assert!(v.verify("").is_err());
    }

    #[test]
    fn test_identity_rejects_unknown_role() {
        let claims = SessionClaims {
            sub: "3".to_string(),
            role: "owner".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(matches!(
            claims.identity(),
            Err(TokenError::InvalidClaims(_))
        ));
    }

    #[test]
    fn test_identity_accepts_legacy_user_spelling() {
        let claims = SessionClaims {
            sub: "3".to_string(),
            role: "user".to_string(),
            iat: 0,
            exp: 0,
        };
        let identity = claims.identity().expect("legacy role");
        assert_eq!(identity.role, Role::Member);
    }

    #[test]
    fn test_identity_rejects_non_numeric_subject() {
        let claims = SessionClaims {
            sub: "alice".to_string(),
            role: "member".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(claims.identity().is_err());
    }
}
