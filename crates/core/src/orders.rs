//! Orders

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::discounts::{DiscountError, line_total};

/// A resolved order line, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Identifier the line was ordered under (or the matched product's storage id).
    pub id: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Unit price charged.
    pub price: Decimal,

    /// Quantity charged.
    pub qty: u32,
}

impl OrderLine {
    /// `price × qty`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Overflow`] if the line total does not fit.
    pub fn total(&self) -> Result<Decimal, DiscountError> {
        line_total(self.price, self.qty)
    }
}

/// Monetary summary of an order.
///
/// `total = subtotal - discount + tax + shipping_cost`. The total is not clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of line totals.
    pub subtotal: Decimal,

    /// Coupon discount applied.
    pub discount: Decimal,

    /// Tax charged.
    pub tax: Decimal,

    /// Shipping charged.
    pub shipping_cost: Decimal,

    /// Amount due.
    pub total: Decimal,
}

impl OrderTotals {
    /// Assemble totals from their parts.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Overflow`] if the total does not fit.
    pub fn new(
        subtotal: Decimal,
        discount: Decimal,
        tax: Decimal,
        shipping_cost: Decimal,
    ) -> Result<Self, DiscountError> {
        let total = subtotal
            .checked_sub(discount)
            .and_then(|total| total.checked_add(tax))
            .and_then(|total| total.checked_add(shipping_cost))
            .ok_or(DiscountError::Overflow)?;

        Ok(Self {
            subtotal,
            discount,
            tax,
            shipping_cost,
            total,
        })
    }
}

/// The outcome of pricing a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedOrder {
    /// Resolved lines, in cart order.
    pub lines: Vec<OrderLine>,

    /// Totals.
    pub totals: OrderTotals,

    /// Code of the coupon that produced `totals.discount`, if any.
    pub applied_coupon: Option<String>,
}

/// Human-facing order number: `ORD-<unix millis>-<4 uppercase hex digits>`.
pub fn order_number(now: Timestamp, entropy: u16) -> String {
    format!("ORD-{}-{entropy:04X}", now.as_millisecond())
}
