//! Discount utilities
//!
//! Money arithmetic shared by coupon evaluation and order totals. Every operation is
//! checked so an absurd cart surfaces as an error instead of a panic.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places money is rounded to.
pub const MONEY_DP: u32 = 2;

/// Errors specific to discount and total calculations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// An intermediate amount overflowed the decimal range.
    #[error("amount overflowed while pricing the order")]
    Overflow,
}

/// Round an amount to whole minor units, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// `percent`% of `amount`, e.g. `percent_of(10, 250.00) == 25.00`. The result is exact; callers
/// that present money round it themselves.
///
/// # Errors
///
/// Returns [`DiscountError::Overflow`] when the product does not fit in a [`Decimal`].
pub fn percent_of(percent: Decimal, amount: Decimal) -> Result<Decimal, DiscountError> {
    amount
        .checked_mul(percent)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(DiscountError::Overflow)
}

/// `price × qty`.
///
/// # Errors
///
/// Returns [`DiscountError::Overflow`] when the line total does not fit in a [`Decimal`].
pub fn line_total(price: Decimal, qty: u32) -> Result<Decimal, DiscountError> {
    price
        .checked_mul(Decimal::from(qty))
        .ok_or(DiscountError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_calculates_correctly() {
        let result = percent_of(Decimal::from(25), Decimal::from(200));

        assert_eq!(result, Ok(Decimal::from(50)));
    }

    #[test]
    fn percent_of_keeps_sub_minor_precision() {
        let result = percent_of(Decimal::from(15), Decimal::new(33_33, 2));

        assert_eq!(result, Ok(Decimal::new(4_9995, 4)));
    }

    #[test]
    fn round_money_rounds_midpoint_away_from_zero() {
        assert_eq!(round_money(Decimal::new(4_9995, 4)), Decimal::new(5_00, 2));
        assert_eq!(round_money(Decimal::new(1_005, 3)), Decimal::new(1_01, 2));
    }

    #[test]
    fn percent_of_overflow_returns_error() {
        let result = percent_of(Decimal::MAX, Decimal::MAX);

        assert_eq!(result, Err(DiscountError::Overflow));
    }

    #[test]
    fn line_total_multiplies_quantity() {
        assert_eq!(
            line_total(Decimal::new(10_50, 2), 3),
            Ok(Decimal::new(31_50, 2))
        );
    }

    #[test]
    fn line_total_overflow_returns_error() {
        assert_eq!(line_total(Decimal::MAX, 2), Err(DiscountError::Overflow));
    }
}
