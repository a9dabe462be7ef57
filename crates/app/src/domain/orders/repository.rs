//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use pharmacy::OrderLine;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    accounts::models::UserUuid,
    orders::models::{
        Order, OrderRecord, OrderStatus, OrderUuid, PAYMENT_CURRENCY, PAYMENT_METHOD,
        PAYMENT_STATUS,
    },
};

const INSERT_ORDER_SQL: &str = include_str!("sql/insert_order.sql");
const INSERT_ORDER_LINE_SQL: &str = include_str!("sql/insert_order_line.sql");
const INSERT_PAYMENT_SQL: &str = include_str!("sql/insert_payment.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const FIND_ORDER_BY_NUMBER_SQL: &str = include_str!("sql/find_order_by_number.sql");
const LIST_ORDERS_BY_EMAIL_SQL: &str = include_str!("sql/list_orders_by_email.sql");
const LIST_RECENT_ORDERS_SQL: &str = include_str!("sql/list_recent_orders.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");
const UPDATE_ORDER_STATUS_BY_NUMBER_SQL: &str =
    include_str!("sql/update_order_status_by_number.sql");
const LIST_ORDER_LINES_SQL: &str = include_str!("sql/list_order_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert the order row. Lines are added separately with [`Self::create_line`].
    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderRecord,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(INSERT_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.order_number)
            .bind(order.user_uuid.into_uuid())
            .bind(order.user_email)
            .bind(order.address_uuid)
            .bind(order.coupon_code)
            .bind(OrderStatus::Pending)
            .bind(order.subtotal)
            .bind(order.discount)
            .bind(order.tax)
            .bind(order.shipping_cost)
            .bind(order.total)
            .bind(order.shipping.name)
            .bind(order.shipping.phone)
            .bind(order.shipping.address)
            .bind(order.shipping.card_last_four)
            .bind(SqlxTimestamp::from(order.placed_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        position: i32,
        line: &OrderLine,
    ) -> Result<(), sqlx::Error> {
        let qty = i32::try_from(line.qty).map_err(|error| sqlx::Error::Encode(Box::new(error)))?;

        query(INSERT_ORDER_LINE_SQL)
            .bind(order.into_uuid())
            .bind(position)
            .bind(line.id.as_deref())
            .bind(line.name.as_deref())
            .bind(line.price)
            .bind(qty)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Record the unsettled card payment for an order.
    pub(crate) async fn create_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        amount: Decimal,
    ) -> Result<Uuid, sqlx::Error> {
        let uuid = Uuid::now_v7();

        query(INSERT_PAYMENT_SQL)
            .bind(uuid)
            .bind(order.into_uuid())
            .bind(PAYMENT_METHOD)
            .bind(amount)
            .bind(PAYMENT_CURRENCY)
            .bind(PAYMENT_STATUS)
            .execute(&mut **tx)
            .await?;

        Ok(uuid)
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<Order>, sqlx::Error> {
        let order = query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        self.with_lines(tx, order).await
    }

    pub(crate) async fn find_by_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order_number: &str,
    ) -> Result<Option<Order>, sqlx::Error> {
        let order = query_as::<Postgres, Order>(FIND_ORDER_BY_NUMBER_SQL)
            .bind(order_number)
            .fetch_optional(&mut **tx)
            .await?;

        self.with_lines(tx, order).await
    }

    /// Orders for an already lower-cased email, newest first.
    pub(crate) async fn list_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let mut orders = query_as::<Postgres, Order>(LIST_ORDERS_BY_EMAIL_SQL)
            .bind(email)
            .fetch_all(&mut **tx)
            .await?;

        self.attach_lines(tx, &mut orders).await?;

        Ok(orders)
    }

    pub(crate) async fn list_recent(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let mut orders = query_as::<Postgres, Order>(LIST_RECENT_ORDERS_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await?;

        self.attach_lines(tx, &mut orders).await?;

        Ok(orders)
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let order = query_as::<Postgres, Order>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status)
            .fetch_optional(&mut **tx)
            .await?;

        self.with_lines(tx, order).await
    }

    pub(crate) async fn update_status_by_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order_number: &str,
        status: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let order = query_as::<Postgres, Order>(UPDATE_ORDER_STATUS_BY_NUMBER_SQL)
            .bind(order_number)
            .bind(status)
            .fetch_optional(&mut **tx)
            .await?;

        self.with_lines(tx, order).await
    }

    async fn with_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: Option<Order>,
    ) -> Result<Option<Order>, sqlx::Error> {
        let mut orders: Vec<Order> = order.into_iter().collect();

        self.attach_lines(tx, &mut orders).await?;

        Ok(orders.pop())
    }

    /// Load the lines of every order in one round trip.
    async fn attach_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &mut [Order],
    ) -> Result<(), sqlx::Error> {
        if orders.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.uuid.into_uuid()).collect();

        let rows: Vec<(Uuid, Option<String>, Option<String>, Decimal, i32)> =
            query_as(LIST_ORDER_LINES_SQL)
                .bind(uuids)
                .fetch_all(&mut **tx)
                .await?;

        let mut lines: FxHashMap<Uuid, Vec<OrderLine>> = FxHashMap::default();

        for (order_uuid, id, name, price, qty) in rows {
            let qty = u32::try_from(qty).map_err(|error| sqlx::Error::Decode(Box::new(error)))?;

            lines.entry(order_uuid).or_default().push(OrderLine {
                id,
                name,
                price,
                qty,
            });
        }

        for order in orders {
            order.items = lines.remove(&order.uuid.into_uuid()).unwrap_or_default();
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            order_number: row.try_get("order_number")?,
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            user_email: row.try_get("user_email")?,
            address_uuid: row.try_get("address_uuid")?,
            coupon_code: row.try_get("coupon_code")?,
            status: row.try_get("status")?,
            items: Vec::new(),
            subtotal: row.try_get("subtotal")?,
            discount: row.try_get("discount")?,
            tax: row.try_get("tax")?,
            shipping_cost: row.try_get("shipping_cost")?,
            total: row.try_get("total")?,
            shipping_name: row.try_get("shipping_name")?,
            shipping_phone: row.try_get("shipping_phone")?,
            shipping_address: row.try_get("shipping_address")?,
            card_last_four: row.try_get("card_last_four")?,
            placed_at: row.try_get::<SqlxTimestamp, _>("placed_at")?.to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        domain::orders::models::Shipping,
        test::{TestContext, helpers::register_user},
    };

    use super::*;

    #[tokio::test]
    async fn create_order_stores_every_column() -> TestResult {
        let ctx = TestContext::new().await;
        let user = register_user(&ctx, "demo@example.com").await?;
        let repository = PgOrdersRepository::new();
        let placed_at = Timestamp::from_second(1_767_225_600)?;
        let address = Uuid::now_v7();

        let mut tx = ctx.db.pool().begin().await?;

        let created = repository
            .create_order(
                &mut tx,
                OrderRecord {
                    uuid: OrderUuid::new(),
                    order_number: "ORD-1767225600000-00FF".to_string(),
                    user_uuid: user.uuid,
                    user_email: user.email.clone(),
                    address_uuid: Some(address),
                    coupon_code: Some("SAVE5".to_string()),
                    subtotal: Decimal::new(3250, 2),
                    discount: Decimal::from(5),
                    tax: Decimal::ZERO,
                    shipping_cost: Decimal::ZERO,
                    total: Decimal::new(2750, 2),
                    shipping: Shipping {
                        name: "Demo User".to_string(),
                        card_last_four: "1234".to_string(),
                        phone: "+201000000000".to_string(),
                        address: "12 Tahrir St, Cairo".to_string(),
                    },
                    placed_at,
                },
            )
            .await?;

        let fetched = repository.get_order(&mut tx, created.uuid).await?;

        tx.commit().await?;

        assert_eq!(fetched.as_ref(), Some(&created));
        assert_eq!(created.order_number, "ORD-1767225600000-00FF");
        assert_eq!(created.user_uuid, user.uuid);
        assert_eq!(created.address_uuid, Some(address));
        assert_eq!(created.coupon_code.as_deref(), Some("SAVE5"));
        assert_eq!(created.status, OrderStatus::Pending);
        assert_eq!(created.subtotal, Decimal::new(3250, 2));
        assert_eq!(created.discount, Decimal::from(5));
        assert_eq!(created.total, Decimal::new(2750, 2));
        assert_eq!(created.shipping_name, "Demo User");
        assert_eq!(created.shipping_phone, "+201000000000");
        assert_eq!(created.shipping_address, "12 Tahrir St, Cairo");
        assert_eq!(created.card_last_four, "1234");
        assert_eq!(created.placed_at, placed_at);

        Ok(())
    }
}
