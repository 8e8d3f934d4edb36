//! Database operations for the site `PostgreSQL` instance.
//!
//! # Tables
//!
//! - `users` - member/admin accounts (argon2 password hashes)
//! - `products` - the menu
//! - `orders` / `order_items` - placed orders with their captured pricing
//! - `reservations` - table bookings with payment status
//!
//! # Migrations
//!
//! Migrations live in `crates/site/migrations/` and are applied with
//! `sqlx migrate run`.

pub mod orders;
pub mod products;
pub mod reservations;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unique constraint violated (duplicate email and the like).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A row holds data the domain types refuse.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The pool is the single process-wide connection owner; it is created once
/// at startup and handed to [`crate::state::AppState`], never stored in a
/// global.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Create a pool without touching the database.
///
/// Connections are established on first use; used by in-process tests that
/// only exercise routes which never reach the database.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection URL cannot be parsed.
pub fn create_lazy_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(2)
        .connect_lazy(database_url.expose_secret())
}

/// Map a sqlx error to `Conflict` when it is a unique violation.
pub(crate) fn map_unique_violation(err: sqlx::Error, what: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(what.to_string());
        }
    }
    RepositoryError::Database(err)
}

/// Map a sqlx error to `Conflict` when it is a foreign key violation.
///
/// Used where a delete can legitimately be blocked by referencing rows, so
/// the caller answers 409 instead of treating it as a server fault.
pub(crate) fn map_foreign_key_violation(err: sqlx::Error, what: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return RepositoryError::Conflict(what.to_string());
        }
    }
    RepositoryError::Database(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_mappers_pass_other_errors_through() {
        assert!(matches!(
            map_unique_violation(sqlx::Error::RowNotFound, "dup"),
            RepositoryError::Database(sqlx::Error::RowNotFound)
        ));
        assert!(matches!(
            map_foreign_key_violation(sqlx::Error::RowNotFound, "referenced"),
            RepositoryError::Database(sqlx::Error::RowNotFound)
        ));
    }
}
