//! Reservation repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use kedai_core::{ReservationId, ReservationPayment, UserId};

use super::RepositoryError;
use crate::models::reservation::Reservation;

/// Repository for table reservations.
pub struct ReservationRepository<'a> {
    pool: &'a PgPool,
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: i32,
    user_id: i32,
    reserved_for: DateTime<Utc>,
    party_size: i32,
    payment: ReservationPayment,
    total: Decimal,
    amount_due: Decimal,
    created_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Self {
            id: ReservationId::new(row.id),
            user_id: UserId::new(row.user_id),
            reserved_for: row.reserved_for,
            party_size: row.party_size,
            payment: row.payment,
            total: row.total,
            amount_due: row.amount_due,
            created_at: row.created_at,
        }
    }
}

const RESERVATION_COLUMNS: &str =
    "id, user_id, reserved_for, party_size, payment, total, amount_due, created_at";

impl<'a> ReservationRepository<'a> {
    /// Create a new reservation repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a reservation with its captured pricing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: UserId,
        reserved_for: DateTime<Utc>,
        party_size: i32,
        payment: ReservationPayment,
        total: Decimal,
        amount_due: Decimal,
    ) -> Result<Reservation, RepositoryError> {
        let row = sqlx::query_as::<_, ReservationRow>(&format!(
            "INSERT INTO reservations (user_id, reserved_for, party_size, payment, total,
                                       amount_due)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {RESERVATION_COLUMNS}"
        ))
        .bind(user_id.as_i32())
        .bind(reserved_for)
        .bind(party_size)
        .bind(payment)
        .bind(total)
        .bind(amount_due)
        .fetch_one(self.pool)
        .await?;

        Ok(Reservation::from(row))
    }

    /// List a member's reservations, soonest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Reservation>, RepositoryError> {
        let rows = sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations
             WHERE user_id = $1 ORDER BY reserved_for"
        ))
        .bind(user_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    /// List every reservation, soonest first (admin dashboard).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Reservation>, RepositoryError> {
        let rows = sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations ORDER BY reserved_for"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }
}
