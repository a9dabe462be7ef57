//! Place Order Handler

use std::str::FromStr;

use pharmacy::CartItem;
use pharmacy_app::domain::orders::models::{NewOrder, PlacedOrder};
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    observability::{record_coupon_redemption, record_order_placed},
    orders::errors::into_api_error,
};

/// Storefront item ids arrive both as numbers, integral or not, and as strings.
///
/// Whole floats drop their fraction when converted, so `1.0` becomes `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum ItemId {
    Number(Number),
    Text(String),
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        match id {
            ItemId::Number(number) => {
                let text = number.to_string();

                Decimal::from_str(&text).map_or(text, |value| value.normalize().to_string())
            }
            ItemId::Text(text) => text,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct CartItemRequest {
    /// Catalog id, internal product id, or any client-side key; a number or a string
    #[salvo(schema(value_type = Option<String>))]
    pub id: Option<ItemId>,

    pub name: Option<String>,

    /// Client price; when absent or zero the catalog price is used
    #[serde(with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    /// Defaults to 1
    pub qty: Option<u32>,
}

impl From<CartItemRequest> for CartItem {
    fn from(item: CartItemRequest) -> Self {
        CartItem {
            id: item.id.map(Into::into),
            name: item.name,
            price: item.price,
            qty: item.qty,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PlaceOrderRequest {
    /// Used to find the customer when `userId` is absent or malformed
    pub user_email: Option<String>,

    pub user_id: Option<String>,

    pub items: Vec<CartItemRequest>,

    pub shipping_name: Option<String>,

    /// Full card number; only the last four characters are kept
    pub shipping_card: Option<String>,

    pub shipping_phone: Option<String>,

    pub shipping_address: Option<String>,

    pub address_id: Option<String>,

    pub coupon_code: Option<String>,
}

impl From<PlaceOrderRequest> for NewOrder {
    fn from(request: PlaceOrderRequest) -> Self {
        NewOrder {
            user_id: request.user_id,
            user_email: request.user_email,
            items: request.items.into_iter().map(Into::into).collect(),
            shipping_name: request.shipping_name,
            shipping_card: request.shipping_card,
            shipping_phone: request.shipping_phone,
            shipping_address: request.shipping_address,
            address_id: request.address_id,
            coupon_code: request.coupon_code,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlacedOrderResponse {
    pub id: Uuid,

    pub order_number: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    pub status: String,
}

impl From<PlacedOrder> for PlacedOrderResponse {
    fn from(order: PlacedOrder) -> Self {
        Self {
            id: order.uuid.into_uuid(),
            order_number: order.order_number,
            total: order.total,
            status: order.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderCreatedResponse {
    pub success: bool,

    /// The order number, not the internal id
    pub order_id: String,

    pub order: PlacedOrderResponse,
}

/// Place Order Handler
///
/// Prices the cart, applies at most one coupon and records the order with its payment
/// placeholder and audit entry.
#[endpoint(tags("orders"), summary = "Place Order")]
pub(crate) async fn handler(
    json: JsonBody<PlaceOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderCreatedResponse>, ApiError> {
    let placed = depot
        .state()?
        .app
        .orders
        .place_order(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    record_order_placed();

    if let Some(code) = placed.coupon_code.as_deref() {
        record_coupon_redemption(code);
    }

    Ok(Json(OrderCreatedResponse {
        success: true,
        order_id: placed.order_number.clone(),
        order: placed.into(),
    }))
}
