//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use pharmacy::{order_number, price_order, resolve_line};
use serde_json::json;
use sqlx::{Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        accounts::{
            models::{User, UserUuid},
            repository::PgAccountsRepository,
        },
        audits::{
            models::{AuditAction, NewAuditEntry},
            repository::PgAuditsRepository,
        },
        catalog::repository::PgCatalogRepository,
        coupons::repository::PgCouponsRepository,
        orders::{
            errors::OrdersServiceError,
            models::{NewOrder, Order, OrderRecord, OrderStatus, OrderUuid, PlacedOrder},
            repository::PgOrdersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    accounts: PgAccountsRepository,
    catalog: PgCatalogRepository,
    coupons: PgCouponsRepository,
    audits: PgAuditsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            accounts: PgAccountsRepository::new(),
            catalog: PgCatalogRepository::new(),
            coupons: PgCouponsRepository::new(),
            audits: PgAuditsRepository::new(),
        }
    }

    /// By id when a valid id is given, otherwise by email.
    async fn resolve_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> Result<Option<User>, OrdersServiceError> {
        if let Some(user) = order.user_id.as_deref().and_then(UserUuid::parse) {
            return Ok(self.accounts.find_user(tx, user).await?);
        }

        match order
            .user_email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
        {
            Some(email) => Ok(self
                .accounts
                .find_user_by_email(tx, &email.to_lowercase())
                .await?),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder, OrdersServiceError> {
        if order.items.is_empty() {
            return Err(OrdersServiceError::EmptyOrder);
        }

        let shipping = order.shipping().ok_or(OrdersServiceError::MissingShipping)?;

        let address_uuid = match order
            .address_id
            .as_deref()
            .filter(|address| !address.trim().is_empty())
        {
            Some(address) => Some(
                address
                    .trim()
                    .parse::<Uuid>()
                    .map_err(|_| OrdersServiceError::InvalidAddressId)?,
            ),
            None => None,
        };

        let mut tx = self.db.begin().await?;

        let user = self
            .resolve_user(&mut tx, &order)
            .await?
            .ok_or(OrdersServiceError::UserNotFound)?;

        let mut lines = Vec::with_capacity(order.items.len());

        for item in &order.items {
            let candidates = if item.client_price().is_some() {
                Vec::new()
            } else {
                self.catalog.find_price_candidates(&mut tx, item).await?
            };

            lines.push(resolve_line(item, &candidates));
        }

        let coupon = match order.coupon_code() {
            Some(code) => self.coupons.find_by_code(&mut tx, code).await?,
            None => None,
        };

        let now = Timestamp::now();

        let priced = price_order(lines, coupon.as_ref().map(|stored| &stored.coupon), now)?;

        let created = self
            .repository
            .create_order(
                &mut tx,
                OrderRecord {
                    uuid: OrderUuid::new(),
                    order_number: order_number(now, rand::random()),
                    user_uuid: user.uuid,
                    user_email: user.email,
                    address_uuid,
                    coupon_code: priced.applied_coupon.clone(),
                    subtotal: priced.totals.subtotal,
                    discount: priced.totals.discount,
                    tax: priced.totals.tax,
                    shipping_cost: priced.totals.shipping_cost,
                    total: priced.totals.total,
                    shipping,
                    placed_at: now,
                },
            )
            .await?;

        for (position, line) in (0_i32..).zip(&priced.lines) {
            self.repository
                .create_line(&mut tx, created.uuid, position, line)
                .await?;
        }

        self.repository
            .create_payment(&mut tx, created.uuid, created.total)
            .await?;

        self.audits
            .record(
                &mut tx,
                NewAuditEntry {
                    user: user.uuid,
                    entity: created.uuid.into_uuid(),
                    action: AuditAction::OrderCreated,
                    detail: json!({
                        "orderNumber": created.order_number,
                        "total": created.total,
                        "itemCount": order.items.len(),
                    }),
                },
            )
            .await?;

        if let Some(stored) = coupon.filter(|_| priced.applied_coupon.is_some()) {
            self.coupons.increment_usage(&mut tx, stored.uuid).await?;
        }

        tx.commit().await?;

        info!(
            order = %created.uuid,
            order_number = %created.order_number,
            total = %created.total,
            "order placed"
        );

        Ok(PlacedOrder {
            uuid: created.uuid,
            order_number: created.order_number,
            total: created.total,
            status: created.status,
            coupon_code: created.coupon_code,
        })
    }

    async fn list_orders(&self, email: String) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .repository
            .list_by_email(&mut tx, &email.to_lowercase())
            .await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, key: String) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let by_uuid = match OrderUuid::parse(&key) {
            Some(order) => self.repository.get_order(&mut tx, order).await?,
            None => None,
        };

        let order = match by_uuid {
            Some(order) => Some(order),
            None => self.repository.find_by_number(&mut tx, &key).await?,
        };

        tx.commit().await?;

        order.ok_or(OrdersServiceError::NotFound)
    }

    async fn update_status(
        &self,
        key: String,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = match OrderUuid::parse(&key) {
            Some(order) => self.repository.update_status(&mut tx, order, status).await?,
            None => {
                self.repository
                    .update_status_by_number(&mut tx, &key, status)
                    .await?
            }
        };

        tx.commit().await?;

        let order = order.ok_or(OrdersServiceError::NotFound)?;

        info!(order = %order.uuid, status = %order.status, "order status updated");

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Price the cart, apply at most one coupon and record the order, its lines, an unsettled
    /// payment and an `order_created` audit entry in a single transaction.
    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder, OrdersServiceError>;

    /// Orders placed under `email`, newest first.
    async fn list_orders(&self, email: String) -> Result<Vec<Order>, OrdersServiceError>;

    /// An order by internal id, falling back to its order number.
    async fn get_order(&self, key: String) -> Result<Order, OrdersServiceError>;

    /// Set the status of the order identified by internal id, or by order number when `key`
    /// is not an id.
    async fn update_status(
        &self,
        key: String,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}
