//! Reports Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::reports::models::{OrderSummary, TopProduct};

const ORDER_SUMMARY_SQL: &str = include_str!("sql/order_summary.sql");
const COUNT_USERS_SQL: &str = include_str!("sql/count_users.sql");
const TOP_PRODUCTS_SQL: &str = include_str!("sql/top_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReportsRepository;

impl PgReportsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn order_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<OrderSummary, sqlx::Error> {
        query_as::<Postgres, OrderSummary>(ORDER_SUMMARY_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_users(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_USERS_SQL).fetch_one(&mut **tx).await
    }

    /// Best sellers by units sold.
    pub(crate) async fn top_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<TopProduct>, sqlx::Error> {
        query_as::<Postgres, TopProduct>(TOP_PRODUCTS_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            total_orders: row.try_get("total_orders")?,
            total_revenue: row.try_get("total_revenue")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for TopProduct {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            name: row.try_get("name")?,
            sold: row.try_get("sold")?,
            revenue: row.try_get("revenue")?,
        })
    }
}
