//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use kedai_core::{Email, Role, UserId};

/// A registered account, member or admin.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address, validated at the boundary.
    pub email: Email,
    /// Canonical role.
    pub role: Role,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
