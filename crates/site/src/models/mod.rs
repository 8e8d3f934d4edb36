//! Domain models and request payloads.
//!
//! Payload types validate themselves before anything reaches the pricing
//! engine or a repository; quantities and prices are checked here so the
//! pure core can assume well-formed input.

pub mod order;
pub mod product;
pub mod reservation;
pub mod user;

use thiserror::Error;

/// A malformed order/reservation/product payload.
///
/// Surfaced to API callers as `{"success": false, "message": ...}`, never
/// as an unhandled fault.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable reason, safe to echo to the client.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
