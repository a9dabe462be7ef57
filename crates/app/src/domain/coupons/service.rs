//! Coupons service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use pharmacy::CouponRejection;
use rust_decimal::Decimal;

use crate::{
    database::Db,
    domain::coupons::{
        errors::CouponsServiceError, models::CouponPreview, repository::PgCouponsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCouponsService {
    db: Db,
    repository: PgCouponsRepository,
}

impl PgCouponsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCouponsRepository::new(),
        }
    }
}

#[async_trait]
impl CouponsService for PgCouponsService {
    async fn validate(
        &self,
        code: String,
        subtotal: Option<Decimal>,
    ) -> Result<CouponPreview, CouponsServiceError> {
        let mut tx = self.db.begin().await?;

        let stored = self.repository.find_by_code(&mut tx, &code).await?;

        tx.commit().await?;

        let coupon = stored
            .map(|stored| stored.coupon)
            .ok_or(CouponRejection::Unavailable)?;

        let discount = coupon.preview(Timestamp::now(), subtotal)?;

        Ok(CouponPreview {
            code: coupon.code,
            discount_type: coupon.discount_type,
            value: coupon.value,
            discount,
            expires_at: coupon.expires_at,
        })
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Preview the discount `code` grants on `subtotal` without redeeming it.
    async fn validate(
        &self,
        code: String,
        subtotal: Option<Decimal>,
    ) -> Result<CouponPreview, CouponsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use pharmacy::{Coupon, DiscountType};
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{create_coupon, save5, welcome10},
    };

    use super::*;

    #[tokio::test]
    async fn validate_returns_capped_percentage_discount() -> TestResult {
        let ctx = TestContext::new().await;
        create_coupon(&ctx, &welcome10()).await?;

        let preview = ctx
            .coupons
            .validate("WELCOME10".to_string(), Some(Decimal::from(500)))
            .await?;

        assert_eq!(preview.discount_type, DiscountType::Percentage);
        assert_eq!(preview.value, Decimal::from(10));
        assert_eq!(preview.discount, Decimal::from(20));

        Ok(())
    }

    #[tokio::test]
    async fn validate_without_subtotal_previews_zero() -> TestResult {
        let ctx = TestContext::new().await;
        create_coupon(&ctx, &save5()).await?;

        let preview = ctx.coupons.validate("SAVE5".to_string(), None).await?;

        assert_eq!(preview.code, "SAVE5");
        assert_eq!(preview.discount, Decimal::ZERO);

        Ok(())
    }

    #[tokio::test]
    async fn validate_unknown_code_is_unavailable() {
        let ctx = TestContext::new().await;

        let result = ctx
            .coupons
            .validate("NOPE".to_string(), Some(Decimal::from(100)))
            .await;

        assert!(
            matches!(
                result,
                Err(CouponsServiceError::Rejected(CouponRejection::Unavailable))
            ),
            "expected Unavailable, got {result:?}"
        );
    }

    #[tokio::test]
    async fn validate_code_is_case_sensitive() -> TestResult {
        let ctx = TestContext::new().await;
        create_coupon(&ctx, &save5()).await?;

        let result = ctx
            .coupons
            .validate("save5".to_string(), Some(Decimal::from(100)))
            .await;

        assert!(
            matches!(
                result,
                Err(CouponsServiceError::Rejected(CouponRejection::Unavailable))
            ),
            "expected Unavailable, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn validate_expired_coupon_is_unavailable() -> TestResult {
        let ctx = TestContext::new().await;
        create_coupon(
            &ctx,
            &Coupon {
                expires_at: Some(Timestamp::now() - SignedDuration::from_hours(1)),
                ..save5()
            },
        )
        .await?;

        let result = ctx
            .coupons
            .validate("SAVE5".to_string(), Some(Decimal::from(100)))
            .await;

        assert!(
            matches!(
                result,
                Err(CouponsServiceError::Rejected(CouponRejection::Unavailable))
            ),
            "expected Unavailable, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn validate_exhausted_coupon_reports_usage_limit() -> TestResult {
        let ctx = TestContext::new().await;
        create_coupon(
            &ctx,
            &Coupon {
                usage_limit: Some(1),
                used_count: 1,
                ..welcome10()
            },
        )
        .await?;

        let result = ctx
            .coupons
            .validate("WELCOME10".to_string(), Some(Decimal::from(100)))
            .await;

        assert!(
            matches!(
                result,
                Err(CouponsServiceError::Rejected(
                    CouponRejection::UsageLimitReached
                ))
            ),
            "expected UsageLimitReached, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn validate_below_minimum_reports_minimum() -> TestResult {
        let ctx = TestContext::new().await;
        create_coupon(&ctx, &welcome10()).await?;

        let result = ctx
            .coupons
            .validate("WELCOME10".to_string(), Some(Decimal::from(20)))
            .await;

        let Err(error) = result else {
            panic!("expected a rejection, got {result:?}");
        };

        assert_eq!(error.to_string(), "Minimum order amount is L.E 50");

        Ok(())
    }

    #[tokio::test]
    async fn validate_does_not_consume_a_use() -> TestResult {
        let ctx = TestContext::new().await;
        create_coupon(&ctx, &save5()).await?;

        ctx.coupons
            .validate("SAVE5".to_string(), Some(Decimal::from(100)))
            .await?;

        let used: i64 = sqlx::query_scalar("SELECT used_count FROM coupons WHERE code = 'SAVE5'")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(used, 0);

        Ok(())
    }
}
