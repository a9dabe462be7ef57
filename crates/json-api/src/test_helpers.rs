//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use pharmacy::OrderLine;
use pharmacy_app::{
    context::AppContext,
    database::Db,
    domain::{
        accounts::{MockAccountsService, models::User},
        addresses::MockAddressesService,
        catalog::{MockCatalogService, models::Product},
        coupons::MockCouponsService,
        health::MockHealthService,
        orders::{
            MockOrdersService,
            models::{Order, OrderStatus},
        },
        reports::MockReportsService,
    },
};
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use sqlx::postgres::PgPoolOptions;

use crate::state::State;

/// Never dialled: handlers only reach the store through the mocked services.
const UNUSED_DATABASE_URL: &str = "postgres://pharmacy@localhost:5432/unused";

/// One mock per service. Any call without a matching expectation panics.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) accounts: MockAccountsService,
    pub(crate) addresses: MockAddressesService,
    pub(crate) catalog: MockCatalogService,
    pub(crate) coupons: MockCouponsService,
    pub(crate) health: MockHealthService,
    pub(crate) orders: MockOrdersService,
    pub(crate) reports: MockReportsService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        let pool = PgPoolOptions::new()
            .connect_lazy(UNUSED_DATABASE_URL)
            .expect("lazy pool should not connect");

        State::from_app_context(AppContext {
            db: Db::new(pool),
            accounts: Arc::new(self.accounts),
            addresses: Arc::new(self.addresses),
            catalog: Arc::new(self.catalog),
            coupons: Arc::new(self.coupons),
            health: Arc::new(self.health),
            orders: Arc::new(self.orders),
            reports: Arc::new(self.reports),
        })
    }
}

pub(crate) fn service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

pub(crate) fn make_user(email: &str) -> User {
    User {
        uuid: Default::default(),
        email: email.to_string(),
        full_name: "Demo User".to_string(),
        phone: Some("+1234567890".to_string()),
        role: "customer".to_string(),
        is_verified: true,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(id: &str, name: &str, price: Decimal) -> Product {
    Product {
        uuid: Default::default(),
        id: id.to_string(),
        name: name.to_string(),
        price,
        category: "vitamins".to_string(),
        stock: 120,
        rx: false,
        description: None,
        sku: Some(format!("VIT-{id:0>4}")),
        manufacturer: Some("Pharco Pharmaceuticals".to_string()),
        image_url: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(order_number: &str, email: &str) -> Order {
    Order {
        uuid: Default::default(),
        order_number: order_number.to_string(),
        user_uuid: Default::default(),
        user_email: email.to_string(),
        address_uuid: None,
        coupon_code: None,
        status: OrderStatus::Pending,
        items: vec![OrderLine {
            id: Some("1".to_string()),
            name: Some("Vitamin C 1000mg".to_string()),
            price: Decimal::new(1050, 2),
            qty: 2,
        }],
        subtotal: Decimal::new(2100, 2),
        discount: Decimal::ZERO,
        tax: Decimal::ZERO,
        shipping_cost: Decimal::ZERO,
        total: Decimal::new(2100, 2),
        shipping_name: "Demo User".to_string(),
        shipping_phone: "+1234567890".to_string(),
        shipping_address: "12 Tahrir St, Cairo".to_string(),
        card_last_four: "1234".to_string(),
        placed_at: Timestamp::UNIX_EPOCH,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
