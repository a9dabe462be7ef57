//! Admin Stats Handler

use pharmacy_app::domain::reports::models::{AdminStats, TopProduct};
use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    admin::errors::into_api_error, errors::ApiError, extensions::*,
    orders::models::OrderResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsSummary {
    pub total_users: i64,

    pub total_products: i64,

    pub total_orders: i64,

    /// Sum of totals of every order that is not cancelled
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_revenue: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub average_order_value: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TopProductResponse {
    /// Line name; lines ordered without one are grouped under `null`
    pub name: Option<String>,

    pub sold: i64,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub revenue: Decimal,
}

impl From<TopProduct> for TopProductResponse {
    fn from(product: TopProduct) -> Self {
        Self {
            name: product.name,
            sold: product.sold,
            revenue: product.revenue,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsResponse {
    pub success: bool,

    pub stats: StatsSummary,

    /// The five latest orders
    pub recent_orders: Vec<OrderResponse>,

    /// The five best sellers by quantity
    pub top_products: Vec<TopProductResponse>,
}

impl From<AdminStats> for StatsResponse {
    fn from(stats: AdminStats) -> Self {
        Self {
            success: true,
            stats: StatsSummary {
                total_users: stats.total_users,
                total_products: stats.total_products,
                total_orders: stats.total_orders,
                total_revenue: stats.total_revenue,
                average_order_value: stats.average_order_value,
            },
            recent_orders: stats.recent_orders.into_iter().map(Into::into).collect(),
            top_products: stats.top_products.into_iter().map(Into::into).collect(),
        }
    }
}

/// Admin Stats Handler
#[endpoint(tags("admin"), summary = "Store Statistics")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StatsResponse>, ApiError> {
    let stats = depot
        .state()?
        .app
        .reports
        .stats()
        .await
        .map_err(into_api_error)?;

    Ok(Json(stats.into()))
}
