//! Order domain types and the checkout payload.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kedai_core::{OrderId, ProductId, UserId};

use super::ValidationError;

/// Most line items accepted in one order.
const MAX_ORDER_LINES: usize = 50;

/// Largest quantity accepted per line.
const MAX_LINE_QUANTITY: u32 = 99;

/// Kitchen-side order lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Completed,
    Cancelled,
}

/// A placed order with its pricing captured at checkout time.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    /// Absent for guest checkout.
    pub user_id: Option<UserId>,
    pub customer_name: String,
    pub phone: String,
    pub status: OrderStatus,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

/// One stored order line. Price is the unit price captured at checkout.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Decimal,
}

/// One requested line at checkout. The unit price is looked up server-side;
/// clients never supply prices.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Checkout payload.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub phone: String,
    pub items: Vec<OrderLineRequest>,
}

impl OrderRequest {
    /// Validate the payload before pricing.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty name/phone, an empty item
    /// list, a zero quantity, or an out-of-range line count/quantity.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.customer_name.trim().is_empty() {
            return Err(ValidationError::new("customer name is required"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::new("phone number is required"));
        }
        validate_lines(&self.items)
    }
}

/// Shared line validation for orders and reservation pre-orders.
pub(crate) fn validate_lines(items: &[OrderLineRequest]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::new("order must contain at least one item"));
    }
    if items.len() > MAX_ORDER_LINES {
        return Err(ValidationError::new("too many items in one order"));
    }
    for line in items {
        if line.quantity == 0 {
            return Err(ValidationError::new("item quantity must be at least 1"));
        }
        if line.quantity > MAX_LINE_QUANTITY {
            return Err(ValidationError::new("item quantity is too large"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: i32, quantity: u32) -> OrderLineRequest {
        OrderLineRequest {
            product_id: ProductId::new(id),
            quantity,
        }
    }

    fn request() -> OrderRequest {
        OrderRequest {
            customer_name: "Budi".to_string(),
            phone: "+62812345678".to_string(),
            items: vec![line(1, 2), line(2, 1)],
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_items() {
        let mut r = request();
        r.items.clear();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_quantity() {
        let mut r = request();
        r.items = vec![line(1, 0)];
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut r = request();
        r.customer_name = " ".to_string();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_order() {
        let mut r = request();
        r.items = (0..51).map(|i| line(i, 1)).collect();
        assert!(r.validate().is_err());
    }
}
