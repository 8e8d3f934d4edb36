//! The canonical user role enumeration.
//!
//! There is exactly one role enum in Kedai. Earlier iterations of the app
//! carried a second `user`/`admin` spelling in one schema; every call site
//! now goes through [`Role`], with `member` as the wire spelling.

use serde::{Deserialize, Serialize};

/// Authenticated user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "user_role", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A registered customer.
    Member,
    /// Staff with access to the product/order dashboard.
    Admin,
}

impl Role {
    /// The dashboard path this role is sent to after login, and whenever a
    /// logged-in user lands on a page not meant for their role.
    #[must_use]
    pub const fn home_path(self) -> &'static str {
        match self {
            Self::Member => "/member",
            Self::Admin => "/admin",
        }
    }

    /// Wire spelling of the role, as stored in token claims.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }

    /// Parse the wire spelling. Accepts the legacy `user` spelling for
    /// tokens issued before the enums were unified.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "member" | "user" => Some(Self::Member),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_spelling() {
        assert_eq!(Role::Member.as_str(), "member");
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(serde_json::to_string(&Role::Member).expect("json"), "\"member\"");
    }

    #[test]
    fn test_role_parse_accepts_legacy_user() {
        assert_eq!(Role::parse("member"), Some(Role::Member));
        assert_eq!(Role::parse("user"), Some(Role::Member));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("superadmin"), None);
    }

    #[test]
    fn test_role_home_paths() {
        assert_eq!(Role::Member.home_path(), "/member");
        assert_eq!(Role::Admin.home_path(), "/admin");
    }
}
