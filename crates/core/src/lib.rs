//! Pharmacy Pricing
//!
//! Pure checkout arithmetic for the pharmacy storefront: cart line normalisation, catalog
//! price resolution, coupon redeemability and discounts, and order total assembly.
//!
//! Nothing in this crate performs I/O. Callers fetch candidate products and coupons from
//! their store and hand them in; the functions here decide what gets charged.

pub mod cart;
pub mod catalog;
pub mod coupons;
pub mod discounts;
pub mod orders;
pub mod pricing;

pub use cart::CartItem;
pub use catalog::{CatalogProduct, ProductKey};
pub use coupons::{Coupon, CouponPreviewError, CouponRejection, DiscountType};
pub use discounts::DiscountError;
pub use orders::{OrderLine, OrderTotals, PricedOrder, order_number};
pub use pricing::{price_order, resolve_line};
