//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        accounts::{AccountsService, PgAccountsService},
        addresses::{AddressesService, PgAddressesService},
        catalog::{CatalogService, PgCatalogService},
        coupons::{CouponsService, PgCouponsService},
        health::{HealthService, PgHealthService},
        orders::{OrdersService, PgOrdersService},
        reports::{PgReportsService, ReportsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub db: Db,
    pub accounts: Arc<dyn AccountsService>,
    pub addresses: Arc<dyn AddressesService>,
    pub catalog: Arc<dyn CatalogService>,
    pub coupons: Arc<dyn CouponsService>,
    pub health: Arc<dyn HealthService>,
    pub orders: Arc<dyn OrdersService>,
    pub reports: Arc<dyn ReportsService>,
}

impl AppContext {
    /// Wire every service to a single pool.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            accounts: Arc::new(PgAccountsService::new(db.clone())),
            addresses: Arc::new(PgAddressesService::new(db.clone())),
            catalog: Arc::new(PgCatalogService::new(db.clone())),
            coupons: Arc::new(PgCouponsService::new(db.clone())),
            health: Arc::new(PgHealthService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            reports: Arc::new(PgReportsService::new(db.clone())),
            db,
        }
    }

    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::from_db(Db::new(pool)))
    }
}
