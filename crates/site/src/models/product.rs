//! Menu product types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kedai_core::ProductId;

use super::ValidationError;

/// Longest accepted product name.
const MAX_NAME_LENGTH: usize = 120;

/// A menu item.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    /// Menu section, e.g. "makanan", "minuman", "dessert".
    pub category: String,
    /// Unit price in rupiah.
    pub price: Decimal,
    /// Blob-storage URL of the product photo, if uploaded.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or replacing a menu item (admin dashboard).
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

impl ProductPayload {
    /// Validate the payload before it reaches the repository.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty name/category, an over-long
    /// name, or a negative price.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("product name is required"));
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::new("product name is too long"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::new("product category is required"));
        }
        if self.price < Decimal::ZERO {
            return Err(ValidationError::new("product price cannot be negative"));
        }
        Ok(())
    }
}
