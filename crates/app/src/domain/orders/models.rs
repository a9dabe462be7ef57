//! Order Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use pharmacy::{CartItem, OrderLine};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::{domain::accounts::models::UserUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Payment method recorded for every order.
pub const PAYMENT_METHOD: &str = "card";

/// Currency every payment is recorded in.
pub const PAYMENT_CURRENCY: &str = "EGP";

/// Status of a newly created payment. Payments are never settled.
pub const PAYMENT_STATUS: &str = "pending";

/// Fulfilment status. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    ReadyForShipment,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::Processing,
        Self::ReadyForShipment,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
        Self::Returned,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::ReadyForShipment => "ready_for_shipment",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Not one of the [`OrderStatus`] names.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Invalid status")]
pub struct InvalidOrderStatus;

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or(InvalidOrderStatus)
    }
}

/// Order Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub uuid: OrderUuid,

    /// Customer-facing order number, e.g. `ORD-1700000000123-0A1F`.
    pub order_number: String,
    pub user_uuid: UserUuid,
    pub user_email: String,
    pub address_uuid: Option<Uuid>,

    /// Code of the coupon that was applied, if any.
    pub coupon_code: Option<String>,
    pub status: OrderStatus,
    pub items: Vec<OrderLine>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub tax: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    pub shipping_name: String,
    pub shipping_phone: String,
    pub shipping_address: String,
    pub card_last_four: String,
    pub placed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Checkout request, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOrder {
    /// Preferred over `user_email` when it is a valid id.
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub items: Vec<CartItem>,
    pub shipping_name: Option<String>,

    /// Card number or token. Only the last four characters are kept.
    pub shipping_card: Option<String>,
    pub shipping_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub address_id: Option<String>,
    pub coupon_code: Option<String>,
}

/// Shipping details that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Shipping {
    pub name: String,
    pub card_last_four: String,
    pub phone: String,
    pub address: String,
}

impl NewOrder {
    /// Every shipping field is required.
    pub(crate) fn shipping(&self) -> Option<Shipping> {
        let field = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|value| !value.trim().is_empty())
                .map(ToString::to_string)
        };

        Some(Shipping {
            name: field(&self.shipping_name)?,
            card_last_four: card_last_four(&field(&self.shipping_card)?).to_string(),
            phone: field(&self.shipping_phone)?,
            address: field(&self.shipping_address)?,
        })
    }

    /// The coupon code, ignoring blank values.
    pub(crate) fn coupon_code(&self) -> Option<&str> {
        self.coupon_code
            .as_deref()
            .filter(|code| !code.trim().is_empty())
    }
}

/// The last four characters of a card number or token.
pub(crate) fn card_last_four(card: &str) -> &str {
    let start = card
        .char_indices()
        .rev()
        .nth(3)
        .map_or(0, |(index, _)| index);

    &card[start..]
}

/// An order row to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderRecord {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub user_uuid: UserUuid,
    pub user_email: String,
    pub address_uuid: Option<Uuid>,
    pub coupon_code: Option<String>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub tax: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    pub shipping: Shipping,
    pub placed_at: Timestamp,
}

/// Summary returned once an order has been placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub total: Decimal,
    pub status: OrderStatus,

    /// Code of the coupon that was redeemed, if any.
    pub coupon_code: Option<String>,
}
