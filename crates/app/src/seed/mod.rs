//! Demo data loader.
//!
//! Replaces the whole store with a fixed catalog of four categories and 200 products, a
//! verified demo customer and the `WELCOME10` / `SAVE5` coupons. Prices and stock levels
//! are drawn at random within per-category bands on every run.

use jiff::{SignedDuration, Timestamp};
use pharmacy::{Coupon, DiscountType};
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction, query};
use thiserror::Error;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        accounts::{
            models::{CUSTOMER_ROLE, NewUser, UserUuid},
            passwords::hash_password,
            repository::PgAccountsRepository,
        },
        catalog::{
            models::{Category, NewProduct, ProductUuid},
            repository::PgCatalogRepository,
        },
        coupons::repository::PgCouponsRepository,
    },
};

mod fixtures;

const TRUNCATE_SQL: &str = include_str!("sql/truncate.sql");

/// Demo customer credentials.
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "Demo123!";

const MANUFACTURERS: [&str; 11] = [
    "Eva Pharma",
    "Pharco",
    "EIPICO",
    "Amoun",
    "Marcyrl",
    "SEDICO",
    "Global Napi",
    "GSK Egypt",
    "Sanofi Egypt",
    "Novartis Egypt",
    "Pfizer Egypt",
];

const WELCOME_COUPON_LIFETIME: SignedDuration = SignedDuration::from_hours(90 * 24);

/// One fixture category and how its products are generated.
struct CategoryFixture {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    product_description: &'static str,
    image_url: &'static str,
    /// Inclusive price band in whole pounds.
    price_band: (i64, i64),
    rx: bool,
    products: &'static [&'static str],
}

const CATEGORIES: [CategoryFixture; 4] = [
    CategoryFixture {
        id: "vitals",
        name: "Vital Medications",
        icon: "💊",
        description: "Essential prescription and over-the-counter medications for vital health conditions",
        product_description: "Core prescription and pharmacy essentials used across Egypt.",
        image_url: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=900&q=80",
        price_band: (12, 60),
        rx: true,
        products: &fixtures::VITALS,
    },
    CategoryFixture {
        id: "vitamins",
        name: "Vitamins",
        icon: "🥗",
        description: "Nutritional supplements and vitamins for daily health",
        product_description: "Common supplements available in Egyptian pharmacies.",
        image_url: "https://images.unsplash.com/photo-1506806732259-39c2d0268443?auto=format&fit=crop&w=900&q=80",
        price_band: (6, 35),
        rx: false,
        products: &fixtures::VITAMINS,
    },
    CategoryFixture {
        id: "fitness",
        name: "Fitness",
        icon: "💪",
        description: "Sports nutrition and fitness supplements",
        product_description: "Sport and recovery supplements stocked in local pharmacies.",
        image_url: "https://images.everydayhealth.com/images/healthy-living/fitness/everything-you-need-know-about-fitness-1440x810.jpg?sfvrsn=2fee0a3b_5",
        price_band: (15, 90),
        rx: false,
        products: &fixtures::FITNESS,
    },
    CategoryFixture {
        id: "cosmetics",
        name: "Cosmetics",
        icon: "✨",
        description: "Skincare and beauty products",
        product_description: "Dermatology and cosmeceutical pharmacy staples.",
        image_url: "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?auto=format&fit=crop&w=900&q=80",
        price_band: (8, 70),
        rx: false,
        products: &fixtures::COSMETICS,
    },
];

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to hash demo password: {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("coupon expiry out of range: {0}")]
    Timestamp(#[from] jiff::Error),

    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

/// Row counts written by [`seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub users: usize,
    pub coupons: usize,
}

/// Wipe every table and load the demo data set in a single transaction.
///
/// # Errors
///
/// Returns an error if any statement fails; nothing is written in that case.
pub async fn seed(db: &Db) -> Result<SeedSummary, SeedError> {
    let products = fixture_products(&mut rand::thread_rng());
    let password_hash = hash_password(DEMO_PASSWORD).map_err(SeedError::PasswordHash)?;
    let coupons = fixture_coupons(Timestamp::now())?;

    let mut tx = db.begin().await?;

    query(TRUNCATE_SQL).execute(&mut *tx).await?;

    info!("cleared existing data");

    let summary = SeedSummary {
        categories: insert_categories(&mut tx).await?,
        products: insert_products(&mut tx, products).await?,
        users: insert_demo_user(&mut tx, password_hash).await?,
        coupons: insert_coupons(&mut tx, &coupons).await?,
    };

    tx.commit().await?;

    info!(
        categories = summary.categories,
        products = summary.products,
        users = summary.users,
        coupons = summary.coupons,
        "database seeded"
    );

    Ok(summary)
}

async fn insert_categories(tx: &mut Transaction<'_, Postgres>) -> Result<usize, sqlx::Error> {
    let repository = PgCatalogRepository::new();

    for fixture in &CATEGORIES {
        repository
            .create_category(
                tx,
                Category {
                    id: fixture.id.to_string(),
                    name: fixture.name.to_string(),
                    icon: Some(fixture.icon.to_string()),
                    description: Some(fixture.description.to_string()),
                },
            )
            .await?;
    }

    Ok(CATEGORIES.len())
}

async fn insert_products(
    tx: &mut Transaction<'_, Postgres>,
    products: Vec<NewProduct>,
) -> Result<usize, sqlx::Error> {
    let repository = PgCatalogRepository::new();
    let count = products.len();

    for product in products {
        repository.create_product(tx, product).await?;
    }

    Ok(count)
}

async fn insert_demo_user(
    tx: &mut Transaction<'_, Postgres>,
    password_hash: String,
) -> Result<usize, sqlx::Error> {
    PgAccountsRepository::new()
        .create_user(
            tx,
            NewUser {
                uuid: UserUuid::new(),
                email: DEMO_EMAIL.to_string(),
                password_hash,
                full_name: "Demo User".to_string(),
                phone: Some("+1234567890".to_string()),
                role: CUSTOMER_ROLE.to_string(),
                is_verified: true,
            },
        )
        .await?;

    Ok(1)
}

async fn insert_coupons(
    tx: &mut Transaction<'_, Postgres>,
    coupons: &[Coupon],
) -> Result<usize, sqlx::Error> {
    let repository = PgCouponsRepository::new();

    for coupon in coupons {
        repository.create_coupon(tx, coupon).await?;
    }

    Ok(coupons.len())
}

/// Catalog ids run from 1 across all categories; SKUs are `{CAT}-{id:04}`.
fn fixture_products<R: Rng>(rng: &mut R) -> Vec<NewProduct> {
    let manufacturers = MANUFACTURERS.iter().cycle();

    CATEGORIES
        .iter()
        .flat_map(|fixture| fixture.products.iter().map(move |name| (fixture, *name)))
        .zip(manufacturers)
        .zip(1_u32..)
        .map(|(((fixture, name), manufacturer), id)| {
            let (min, max) = fixture.price_band;
            let cents = rng.gen_range(min * 100..=max * 100);

            NewProduct {
                uuid: ProductUuid::new(),
                id: id.to_string(),
                name: name.to_string(),
                price: Decimal::new(cents, 2),
                category: fixture.id.to_string(),
                stock: rng.gen_range(80..=360),
                rx: fixture.rx,
                description: Some(fixture.product_description.to_string()),
                sku: Some(format!("{}-{id:04}", fixture.id[..3].to_uppercase())),
                manufacturer: Some((*manufacturer).to_string()),
                image_url: Some(fixture.image_url.to_string()),
            }
        })
        .collect()
}

fn fixture_coupons(now: Timestamp) -> Result<[Coupon; 2], jiff::Error> {
    Ok([
        Coupon {
            code: "WELCOME10".to_string(),
            discount_type: DiscountType::Percentage,
            value: Decimal::from(10),
            min_order_amount: Some(Decimal::from(50)),
            max_discount: Some(Decimal::from(20)),
            active: true,
            usage_limit: Some(100),
            used_count: 0,
            starts_at: Some(now),
            expires_at: Some(now.checked_add(WELCOME_COUPON_LIFETIME)?),
        },
        Coupon {
            code: "SAVE5".to_string(),
            discount_type: DiscountType::Fixed,
            value: Decimal::from(5),
            min_order_amount: Some(Decimal::from(25)),
            max_discount: None,
            active: true,
            usage_limit: None,
            used_count: 0,
            starts_at: Some(now),
            expires_at: None,
        },
    ])
}
