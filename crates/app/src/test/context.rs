//! Test context for service-level integration tests.

use sqlx::PgPool;

use crate::{
    database::Db,
    domain::{
        accounts::PgAccountsService,
        addresses::PgAddressesService,
        catalog::{PgCatalogService, models::Category, repository::PgCatalogRepository},
        coupons::PgCouponsService,
        health::PgHealthService,
        orders::PgOrdersService,
        reports::PgReportsService,
    },
};

use super::db::TestDb;

/// Categories every test database starts with.
const SEED_CATEGORIES: [(&str, &str); 2] = [("vitamins", "Vitamins"), ("fitness", "Fitness")];

pub struct TestContext {
    pub db: TestDb,
    pub accounts: PgAccountsService,
    pub addresses: PgAddressesService,
    pub catalog: PgCatalogService,
    pub coupons: PgCouponsService,
    pub health: PgHealthService,
    pub orders: PgOrdersService,
    pub reports: PgReportsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;

        Self::seed_categories(test_db.pool()).await;

        let db = Db::new(test_db.pool().clone());

        Self {
            accounts: PgAccountsService::new(db.clone()),
            addresses: PgAddressesService::new(db.clone()),
            catalog: PgCatalogService::new(db.clone()),
            coupons: PgCouponsService::new(db.clone()),
            health: PgHealthService::new(db.clone()),
            orders: PgOrdersService::new(db.clone()),
            reports: PgReportsService::new(db),
            db: test_db,
        }
    }

    async fn seed_categories(pool: &PgPool) {
        let repository = PgCatalogRepository::new();

        let mut tx = pool
            .begin()
            .await
            .expect("Failed to begin category seed transaction");

        for (id, name) in SEED_CATEGORIES {
            repository
                .create_category(
                    &mut tx,
                    Category {
                        id: id.to_string(),
                        name: name.to_string(),
                        icon: None,
                        description: None,
                    },
                )
                .await
                .expect("Failed to seed test category");
        }

        tx.commit()
            .await
            .expect("Failed to commit category seed transaction");
    }
}
