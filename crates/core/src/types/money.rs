//! Rupiah money helpers over decimal arithmetic.
//!
//! All monetary values in Kedai are `rust_decimal::Decimal`, never floats.
//! Menu prices are whole rupiah in practice, but the two dividing operations
//! in pricing (the member discount and the reservation down payment) can
//! produce fractional amounts, so a single rounding policy lives here.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every derived monetary amount.
const MONEY_SCALE: u32 = 2;

/// Round a derived amount to the fixed monetary scale.
///
/// Policy: 2 decimal places, banker's rounding (midpoint rounds to even).
/// Whole-rupiah inputs pass through unchanged; only division results are
/// affected in practice.
#[must_use]
pub fn round_idr(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Construct a whole-rupiah amount.
#[must_use]
pub fn idr(amount: i64) -> Decimal {
    Decimal::from_i128_with_scale(amount as i128, 0)
}

/// Format an amount for display, e.g. `Rp25.000`.
///
/// Indonesian convention: dot as thousands separator, fractional part (rare)
/// after a comma.
#[must_use]
pub fn format_idr(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let whole = normalized.trunc();
    let frac = normalized.fract();

    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if normalized.is_sign_negative() { "-" } else { "" };
    if frac.is_zero() {
        format!("{sign}Rp{grouped}")
    } else {
        // fract() keeps the scale, e.g. 0.50 -> "0.50"
        let frac_digits = frac.abs().to_string();
        let frac_part = frac_digits.trim_start_matches("0.");
        format!("{sign}Rp{grouped},{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idr_constructor() {
        assert_eq!(idr(25_000).to_string(), "25000");
        assert_eq!(idr(0), Decimal::ZERO);
    }

    #[test]
    fn test_round_idr_whole_amounts_unchanged() {
        assert_eq!(round_idr(idr(12_500)), idr(12_500));
    }

    #[test]
    fn test_round_idr_bankers() {
        // midpoint rounds to even
        let half_cent = Decimal::new(12345, 3); // 12.345
        assert_eq!(round_idr(half_cent), Decimal::new(1234, 2)); // 12.34
        let other = Decimal::new(12355, 3); // 12.355
        assert_eq!(round_idr(other), Decimal::new(1236, 2)); // 12.36
    }

    #[test]
    fn test_format_idr_grouping() {
        assert_eq!(format_idr(idr(0)), "Rp0");
        assert_eq!(format_idr(idr(950)), "Rp950");
        assert_eq!(format_idr(idr(25_000)), "Rp25.000");
        assert_eq!(format_idr(idr(1_250_000)), "Rp1.250.000");
    }

    #[test]
    fn test_format_idr_fractional() {
        let amount = Decimal::new(12_500_50, 2); // 12500.50
        assert_eq!(format_idr(amount), "Rp12.500,5");
    }

    #[test]
    fn test_format_idr_negative() {
        assert_eq!(format_idr(idr(-7_000)), "-Rp7.000");
    }
}
