//! Coupons Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use pharmacy::{Coupon, DiscountType};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::coupons::models::{CouponUuid, StoredCoupon};

const FIND_COUPON_BY_CODE_SQL: &str = include_str!("sql/find_coupon_by_code.sql");
const INCREMENT_COUPON_USAGE_SQL: &str = include_str!("sql/increment_coupon_usage.sql");
const INSERT_COUPON_SQL: &str = include_str!("sql/insert_coupon.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCouponsRepository;

impl PgCouponsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Exact, case-sensitive code lookup. Redeemability is left to the caller.
    pub(crate) async fn find_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<StoredCoupon>, sqlx::Error> {
        query_as::<Postgres, StoredCoupon>(FIND_COUPON_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn increment_usage(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        coupon: CouponUuid,
    ) -> Result<(), sqlx::Error> {
        query(INCREMENT_COUPON_USAGE_SQL)
            .bind(coupon.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn create_coupon(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        coupon: &Coupon,
    ) -> Result<StoredCoupon, sqlx::Error> {
        query_as::<Postgres, StoredCoupon>(INSERT_COUPON_SQL)
            .bind(CouponUuid::new().into_uuid())
            .bind(&coupon.code)
            .bind(coupon.discount_type.as_str())
            .bind(coupon.value)
            .bind(coupon.min_order_amount)
            .bind(coupon.max_discount)
            .bind(coupon.active)
            .bind(coupon.usage_limit)
            .bind(coupon.used_count)
            .bind(coupon.starts_at.map(SqlxTimestamp::from))
            .bind(coupon.expires_at.map(SqlxTimestamp::from))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for StoredCoupon {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let discount_type = row
            .try_get::<String, _>("discount_type")?
            .parse::<DiscountType>()
            .map_err(|error| sqlx::Error::ColumnDecode {
                index: "discount_type".to_string(),
                source: Box::new(error),
            })?;

        Ok(Self {
            uuid: CouponUuid::from_uuid(row.try_get("uuid")?),
            coupon: Coupon {
                code: row.try_get("code")?,
                discount_type,
                value: row.try_get("value")?,
                min_order_amount: row.try_get("min_order_amount")?,
                max_discount: row.try_get("max_discount")?,
                active: row.try_get("active")?,
                usage_limit: row.try_get("usage_limit")?,
                used_count: row.try_get("used_count")?,
                starts_at: row
                    .try_get::<Option<SqlxTimestamp>, _>("starts_at")?
                    .map(SqlxTimestamp::to_jiff),
                expires_at: row
                    .try_get::<Option<SqlxTimestamp>, _>("expires_at")?
                    .map(SqlxTimestamp::to_jiff),
            },
        })
    }
}
