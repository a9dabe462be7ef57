//! Pharmacy Domain Concerns

pub mod accounts;
pub mod addresses;
pub mod audits;
pub mod catalog;
pub mod coupons;
pub mod health;
pub mod orders;
pub mod reports;
