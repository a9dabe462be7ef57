//! Report Models

use rust_decimal::Decimal;

use crate::domain::orders::models::Order;

/// Store-wide figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_products: i64,
    pub total_orders: i64,

    /// Sum of order totals, excluding cancelled orders.
    pub total_revenue: Decimal,

    /// `total_revenue / total_orders`, zero when there are no orders.
    pub average_order_value: Decimal,
    pub recent_orders: Vec<Order>,
    pub top_products: Vec<TopProduct>,
}

/// Best seller, grouped by line name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopProduct {
    pub name: Option<String>,
    pub sold: i64,
    pub revenue: Decimal,
}

/// Order count and revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OrderSummary {
    pub total_orders: i64,
    pub total_revenue: Decimal,
}
