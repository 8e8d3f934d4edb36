//! Table reservation types.
//!
//! A reservation books a table and pre-orders from the menu; the customer
//! pays either the full total or a half down payment when booking.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kedai_core::{ReservationId, ReservationPayment, UserId};

use super::ValidationError;
use super::order::{OrderLineRequest, validate_lines};

/// Largest party a single booking may hold.
const MAX_PARTY_SIZE: i32 = 20;

/// A stored reservation.
#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    /// Reservations require an account; no guest bookings.
    pub user_id: UserId,
    /// When the table is booked for.
    pub reserved_for: DateTime<Utc>,
    pub party_size: i32,
    pub payment: ReservationPayment,
    /// Full order total for the pre-ordered menu.
    pub total: Decimal,
    /// What was actually charged at booking time (total, or half of it).
    pub amount_due: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Booking payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationRequest {
    pub reserved_for: DateTime<Utc>,
    pub party_size: i32,
    pub payment: ReservationPayment,
    /// Menu pre-order; priced like a normal order.
    pub items: Vec<OrderLineRequest>,
}

impl ReservationRequest {
    /// Validate the payload before pricing.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an out-of-range party size or invalid
    /// pre-order lines.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.party_size < 1 {
            return Err(ValidationError::new("party size must be at least 1"));
        }
        if self.party_size > MAX_PARTY_SIZE {
            return Err(ValidationError::new("party size is too large"));
        }
        validate_lines(&self.items)
    }
}
