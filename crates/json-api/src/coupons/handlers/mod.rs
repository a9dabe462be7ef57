//! Coupon Handlers

pub(crate) mod validate;
