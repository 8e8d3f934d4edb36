//! Order and reservation pricing.
//!
//! Every function here is pure: no I/O, no clock, no mutation of inputs.
//! Quantities and prices are validated by the web layer before they get
//! here; negative prices or zero quantities never reach these functions.
//!
//! Derived amounts that come out of a division (discount, down payment) are
//! rounded with [`round_idr`]; sums of validated inputs need no rounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::money::round_idr;

/// Member discount rate, 10%. Fixed policy, not caller-configurable.
const MEMBER_DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// One line item chosen by a customer.
///
/// Immutable once attached to an order. The `price` is the unit price
/// captured at selection time, so later menu price changes do not affect
/// an order already placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelection {
    /// Menu product being ordered.
    pub product_id: ProductId,
    /// Number of units, at least 1.
    pub quantity: u32,
    /// Unit price in rupiah at selection time.
    pub price: Decimal,
}

impl ProductSelection {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// How a reservation is paid up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "reservation_payment", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum ReservationPayment {
    /// The whole total is due at booking time.
    Full,
    /// Half the total is due at booking time, the rest at the table.
    DownPayment,
}

/// Sum of `price * quantity` over all selections. Empty selection is 0.
#[must_use]
pub fn subtotal(items: &[ProductSelection]) -> Decimal {
    items.iter().map(ProductSelection::line_total).sum()
}

/// Member discount: 10% of the subtotal for members, 0 otherwise.
#[must_use]
pub fn member_discount(is_member: bool, subtotal: Decimal) -> Decimal {
    if is_member {
        round_idr(subtotal * MEMBER_DISCOUNT_RATE)
    } else {
        Decimal::ZERO
    }
}

/// Delivery cost for an order.
///
/// Currently flat 0 (pickup and dine-in only); this is the seam where a
/// distance- or weight-based calculation will land. Callers may rely on it
/// being deterministic and side-effect-free, not on it staying 0.
#[must_use]
pub const fn shipping_cost() -> Decimal {
    Decimal::ZERO
}

/// Amount due now for a reservation: the full total, or half of it for a
/// down payment, rounded per the money policy.
#[must_use]
pub fn reservation_due(payment: ReservationPayment, total: Decimal) -> Decimal {
    match payment {
        ReservationPayment::Full => total,
        ReservationPayment::DownPayment => round_idr(total / Decimal::TWO),
    }
}

/// Derived pricing summary for an order.
///
/// Invariant: `total = subtotal - discount + shipping_cost`, never negative
/// for validated input (the discount is a fraction of the subtotal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Compute the full pricing summary for a set of selections.
    #[must_use]
    pub fn compute(items: &[ProductSelection], is_member: bool) -> Self {
        let subtotal = subtotal(items);
        let discount = member_discount(is_member, subtotal);
        let shipping_cost = shipping_cost();
        Self {
            subtotal,
            discount,
            shipping_cost,
            total: subtotal - discount + shipping_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::money::idr;

    fn item(id: i32, price: i64, quantity: u32) -> ProductSelection {
        ProductSelection {
            product_id: ProductId::new(id),
            quantity,
            price: idr(price),
        }
    }

    #[test]
    fn test_subtotal_empty_is_zero() {
        assert_eq!(subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let items = vec![item(1, 10_000, 2), item(2, 5_000, 1)];
        assert_eq!(subtotal(&items), idr(25_000));
        // input untouched
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_member_discount_rates() {
        assert_eq!(member_discount(false, idr(25_000)), Decimal::ZERO);
        assert_eq!(member_discount(true, idr(25_000)), idr(2_500));
        assert_eq!(member_discount(true, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_member_discount_rounds_fractions() {
        // 10% of 125 is 12.5, kept at two decimal places
        assert_eq!(member_discount(true, idr(125)), Decimal::new(1250, 2));
        // 10% of 10.25 is 1.025 -> banker's rounding to 1.02
        let odd = Decimal::new(1025, 2);
        assert_eq!(member_discount(true, odd), Decimal::new(102, 2));
    }

    #[test]
    fn test_shipping_cost_flat_zero() {
        assert_eq!(shipping_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_reservation_due_full() {
        assert_eq!(
            reservation_due(ReservationPayment::Full, idr(100_000)),
            idr(100_000)
        );
    }

    #[test]
    fn test_reservation_due_down_payment_halves() {
        assert_eq!(
            reservation_due(ReservationPayment::DownPayment, idr(100_000)),
            idr(50_000)
        );
    }

    #[test]
    fn test_reservation_due_down_payment_rounds() {
        // 75001 / 2 = 37500.5, representable at scale 2
        assert_eq!(
            reservation_due(ReservationPayment::DownPayment, idr(75_001)),
            Decimal::new(37_500_50, 2)
        );
        // 0.01 / 2 = 0.005 -> banker's rounding to 0.00
        assert_eq!(
            reservation_due(ReservationPayment::DownPayment, Decimal::new(1, 2)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_order_totals_guest() {
        let items = vec![item(1, 10_000, 2), item(2, 5_000, 1)];
        let totals = OrderTotals::compute(&items, false);
        assert_eq!(totals.subtotal, idr(25_000));
        assert_eq!(totals.discount, Decimal::ZERO);
        assert_eq!(totals.shipping_cost, Decimal::ZERO);
        assert_eq!(totals.total, idr(25_000));
    }

    #[test]
    fn test_order_totals_member() {
        let items = vec![item(1, 10_000, 2), item(2, 5_000, 1)];
        let totals = OrderTotals::compute(&items, true);
        assert_eq!(totals.discount, idr(2_500));
        assert_eq!(totals.total, idr(22_500));
    }

    #[test]
    fn test_order_totals_invariant() {
        let items = vec![item(1, 12_345, 3), item(2, 999, 7)];
        for is_member in [false, true] {
            let t = OrderTotals::compute(&items, is_member);
            assert_eq!(t.total, t.subtotal - t.discount + t.shipping_cost);
            assert!(t.total >= Decimal::ZERO);
        }
    }
}
