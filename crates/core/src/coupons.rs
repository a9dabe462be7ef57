//! Coupons
//!
//! A coupon is redeemable at time `T` for subtotal `S` when it is active, `T` falls inside
//! `[starts_at, expires_at)`, it has uses left, and `S` reaches the minimum order amount.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::discounts::{DiscountError, percent_of};

/// How a coupon's `value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountType {
    /// `value` percent of the subtotal, optionally capped.
    Percentage,

    /// `value` off, regardless of the subtotal.
    Fixed,
}

impl DiscountType {
    /// Wire/storage name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown discount type name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown discount type \"{0}\"")]
pub struct UnknownDiscountType(pub String);

impl FromStr for DiscountType {
    type Err = UnknownDiscountType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "percentage" => Ok(Self::Percentage),
            "fixed" => Ok(Self::Fixed),
            other => Err(UnknownDiscountType(other.to_string())),
        }
    }
}

/// Why a coupon cannot be redeemed.
///
/// The messages are shown to shoppers verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CouponRejection {
    /// Unknown code, inactive, not started yet, or expired.
    #[error("Invalid or expired coupon")]
    Unavailable,

    /// Every permitted use has been taken.
    #[error("Coupon usage limit reached")]
    UsageLimitReached,

    /// The subtotal is below the coupon's minimum order amount.
    #[error("Minimum order amount is L.E {minimum}")]
    BelowMinimum {
        /// Required minimum subtotal.
        minimum: Decimal,
    },
}

/// Errors from [`Coupon::preview`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CouponPreviewError {
    /// The coupon cannot be redeemed.
    #[error(transparent)]
    Rejected(#[from] CouponRejection),

    /// The discount could not be calculated.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// A discount coupon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    /// Case-sensitive code the shopper types in.
    pub code: String,

    /// Discount type.
    pub discount_type: DiscountType,

    /// Percentage points or fixed amount, depending on `discount_type`.
    pub value: Decimal,

    /// Minimum subtotal required; `None` means zero.
    pub min_order_amount: Option<Decimal>,

    /// Upper bound on a percentage discount.
    pub max_discount: Option<Decimal>,

    /// Whether the coupon is switched on.
    pub active: bool,

    /// Total number of redemptions allowed; `None` means unlimited.
    pub usage_limit: Option<i64>,

    /// Redemptions so far.
    pub used_count: i64,

    /// Start of the redemption window.
    pub starts_at: Option<Timestamp>,

    /// End of the redemption window (exclusive).
    pub expires_at: Option<Timestamp>,
}

impl Coupon {
    /// Active and inside its `[starts_at, expires_at)` window at `now`.
    pub fn is_available_at(&self, now: Timestamp) -> bool {
        self.active
            && self.starts_at.is_none_or(|starts_at| starts_at <= now)
            && self.expires_at.is_none_or(|expires_at| expires_at > now)
    }

    /// Whether another redemption is allowed.
    pub fn has_uses_left(&self) -> bool {
        self.usage_limit
            .is_none_or(|usage_limit| self.used_count < usage_limit)
    }

    /// Minimum order amount, defaulting to zero.
    pub fn minimum_order(&self) -> Decimal {
        self.min_order_amount.unwrap_or(Decimal::ZERO)
    }

    /// Check every redeemability condition, reporting the first one that fails.
    ///
    /// The minimum order amount is only enforced when a non-zero `subtotal` is supplied,
    /// so a code can be checked before the basket is known.
    ///
    /// # Errors
    ///
    /// Returns the [`CouponRejection`] describing the first failed condition.
    pub fn check_redeemable(
        &self,
        now: Timestamp,
        subtotal: Option<Decimal>,
    ) -> Result<(), CouponRejection> {
        if !self.is_available_at(now) {
            return Err(CouponRejection::Unavailable);
        }

        if !self.has_uses_left() {
            return Err(CouponRejection::UsageLimitReached);
        }

        if let Some(subtotal) = subtotal.filter(|subtotal| !subtotal.is_zero())
            && subtotal < self.minimum_order()
        {
            return Err(CouponRejection::BelowMinimum {
                minimum: self.minimum_order(),
            });
        }

        Ok(())
    }

    /// Whether an order with this `subtotal` may redeem the coupon.
    ///
    /// Unlike [`Coupon::check_redeemable`] the minimum order amount always applies, and the
    /// reason for a refusal is not reported.
    pub fn applies_to_order(&self, now: Timestamp, subtotal: Decimal) -> bool {
        self.is_available_at(now) && self.has_uses_left() && subtotal >= self.minimum_order()
    }

    /// Preview the discount for a code the shopper typed, without redeeming it.
    ///
    /// Without a non-zero `subtotal` only the code itself is checked and the discount is zero.
    ///
    /// # Errors
    ///
    /// Returns [`CouponPreviewError::Rejected`] when the coupon cannot be redeemed, or
    /// [`CouponPreviewError::Discount`] if the discount calculation overflows.
    pub fn preview(
        &self,
        now: Timestamp,
        subtotal: Option<Decimal>,
    ) -> Result<Decimal, CouponPreviewError> {
        self.check_redeemable(now, subtotal)?;

        match subtotal.filter(|subtotal| !subtotal.is_zero()) {
            Some(subtotal) => Ok(self.discount_for(subtotal)?),
            None => Ok(Decimal::ZERO),
        }
    }

    /// Discount this coupon grants on `subtotal`.
    ///
    /// Percentage discounts are capped at `max_discount`. Fixed discounts are returned as-is,
    /// even when they exceed the subtotal.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Overflow`] if the percentage calculation overflows.
    pub fn discount_for(&self, subtotal: Decimal) -> Result<Decimal, DiscountError> {
        match self.discount_type {
            DiscountType::Percentage => {
                let discount = percent_of(self.value, subtotal)?;

                Ok(self
                    .max_discount
                    .map_or(discount, |max_discount| discount.min(max_discount)))
            }
            DiscountType::Fixed => Ok(self.value),
        }
    }
}
