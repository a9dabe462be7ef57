//! Test Helpers

use pharmacy::{Coupon, DiscountType};
use rust_decimal::Decimal;

use crate::{
    domain::{
        accounts::{
            AccountsService, AccountsServiceError,
            models::{Registration, User},
        },
        catalog::{
            models::{NewProduct, Product, ProductUuid},
            repository::PgCatalogRepository,
        },
        coupons::{models::StoredCoupon, repository::PgCouponsRepository},
    },
    test::TestContext,
};

pub(crate) async fn register_user(
    ctx: &TestContext,
    email: &str,
) -> Result<User, AccountsServiceError> {
    ctx.accounts
        .register(Registration {
            name: Some("Demo User".to_string()),
            email: Some(email.to_string()),
            password: Some("Demo123!".to_string()),
            phone: None,
        })
        .await
}

/// Insert an in-stock product into one of the seeded categories.
pub(crate) async fn create_product(
    ctx: &TestContext,
    id: &str,
    name: &str,
    category: &str,
    price: Decimal,
) -> Result<Product, sqlx::Error> {
    let mut tx = ctx.db.pool().begin().await?;

    let product = PgCatalogRepository::new()
        .create_product(
            &mut tx,
            NewProduct {
                uuid: ProductUuid::new(),
                id: id.to_string(),
                name: name.to_string(),
                price,
                category: category.to_string(),
                stock: 100,
                rx: false,
                description: None,
                sku: None,
                manufacturer: None,
                image_url: None,
            },
        )
        .await?;

    tx.commit().await?;

    Ok(product)
}

pub(crate) async fn create_coupon(
    ctx: &TestContext,
    coupon: &Coupon,
) -> Result<StoredCoupon, sqlx::Error> {
    let mut tx = ctx.db.pool().begin().await?;

    let stored = PgCouponsRepository::new()
        .create_coupon(&mut tx, coupon)
        .await?;

    tx.commit().await?;

    Ok(stored)
}

pub(crate) fn save5() -> Coupon {
    Coupon {
        code: "SAVE5".to_string(),
        discount_type: DiscountType::Fixed,
        value: Decimal::from(5),
        min_order_amount: Some(Decimal::from(25)),
        max_discount: None,
        active: true,
        usage_limit: None,
        used_count: 0,
        starts_at: None,
        expires_at: None,
    }
}

pub(crate) fn welcome10() -> Coupon {
    Coupon {
        code: "WELCOME10".to_string(),
        discount_type: DiscountType::Percentage,
        value: Decimal::from(10),
        min_order_amount: Some(Decimal::from(50)),
        max_discount: Some(Decimal::from(20)),
        active: true,
        usage_limit: Some(100),
        used_count: 0,
        starts_at: None,
        expires_at: None,
    }
}
