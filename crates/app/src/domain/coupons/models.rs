//! Coupon Models

use jiff::Timestamp;
use pharmacy::{Coupon, DiscountType};
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Coupon UUID
pub type CouponUuid = TypedUuid<StoredCoupon>;

/// A coupon together with its storage identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCoupon {
    pub uuid: CouponUuid,
    pub coupon: Coupon,
}

/// Result of checking a coupon code before checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponPreview {
    pub code: String,
    pub discount_type: DiscountType,
    pub value: Decimal,

    /// Zero when no subtotal was supplied.
    pub discount: Decimal,
    pub expires_at: Option<Timestamp>,
}
