//! Order response bodies, shared with the admin reports.

use pharmacy::OrderLine;
use pharmacy_app::domain::orders::models::Order;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    pub id: Option<String>,

    pub name: Option<String>,

    /// Unit price charged
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub qty: u32,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            id: line.id,
            name: line.name,
            price: line.price,
            qty: line.qty,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub id: Uuid,

    /// `ORD-{unix millis}-{4 hex}`
    pub order_number: String,

    pub user_id: Uuid,

    pub user_email: String,

    pub address_id: Option<Uuid>,

    /// Coupon applied when the order was placed
    pub coupon_code: Option<String>,

    pub status: String,

    pub items: Vec<OrderLineResponse>,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub subtotal: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub discount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub tax: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub shipping_cost: Decimal,

    /// `subtotal - discount + tax + shippingCost`, possibly negative
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    pub shipping_name: String,

    pub shipping_phone: String,

    pub shipping_address: String,

    pub card_last_four: String,

    pub placed_at: String,

    pub created_at: String,

    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.uuid.into_uuid(),
            order_number: order.order_number,
            user_id: order.user_uuid.into_uuid(),
            user_email: order.user_email,
            address_id: order.address_uuid,
            coupon_code: order.coupon_code,
            status: order.status.to_string(),
            items: order.items.into_iter().map(Into::into).collect(),
            subtotal: order.subtotal,
            discount: order.discount,
            tax: order.tax,
            shipping_cost: order.shipping_cost,
            total: order.total,
            shipping_name: order.shipping_name,
            shipping_phone: order.shipping_phone,
            shipping_address: order.shipping_address,
            card_last_four: order.card_last_four,
            placed_at: order.placed_at.to_string(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    pub success: bool,

    pub data: Vec<OrderResponse>,
}

impl From<Vec<Order>> for OrdersResponse {
    fn from(orders: Vec<Order>) -> Self {
        Self {
            success: true,
            data: orders.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderEnvelope {
    pub success: bool,

    pub data: OrderResponse,
}

impl From<Order> for OrderEnvelope {
    fn from(order: Order) -> Self {
        Self {
            success: true,
            data: order.into(),
        }
    }
}
