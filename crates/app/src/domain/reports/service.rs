//! Reports service.

use async_trait::async_trait;
use mockall::automock;
use pharmacy::discounts::round_money;
use rust_decimal::Decimal;

use crate::{
    database::Db,
    domain::{
        accounts::{models::User, repository::PgAccountsRepository},
        audits::{models::AuditEntry, repository::PgAuditsRepository},
        catalog::{models::InventoryItem, repository::PgCatalogRepository},
        orders::{models::Order, repository::PgOrdersRepository},
        reports::{
            errors::ReportsServiceError, models::AdminStats, repository::PgReportsRepository,
        },
    },
};

/// Rows returned by the admin listings.
pub const ADMIN_LIST_LIMIT: i64 = 200;

const DASHBOARD_LIMIT: i64 = 5;

#[derive(Debug, Clone)]
pub struct PgReportsService {
    db: Db,
    repository: PgReportsRepository,
    accounts: PgAccountsRepository,
    audits: PgAuditsRepository,
    catalog: PgCatalogRepository,
    orders: PgOrdersRepository,
}

impl PgReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReportsRepository::new(),
            accounts: PgAccountsRepository::new(),
            audits: PgAuditsRepository::new(),
            catalog: PgCatalogRepository::new(),
            orders: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl ReportsService for PgReportsService {
    async fn stats(&self) -> Result<AdminStats, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let total_users = self.repository.count_users(&mut tx).await?;
        let total_products = self.catalog.count_products(&mut tx).await?;
        let summary = self.repository.order_summary(&mut tx).await?;
        let recent_orders = self.orders.list_recent(&mut tx, DASHBOARD_LIMIT).await?;
        let top_products = self.repository.top_products(&mut tx, DASHBOARD_LIMIT).await?;

        tx.commit().await?;

        let average_order_value = if summary.total_orders > 0 {
            summary
                .total_revenue
                .checked_div(Decimal::from(summary.total_orders))
                .map(round_money)
                .unwrap_or_default()
        } else {
            Decimal::ZERO
        };

        Ok(AdminStats {
            total_users,
            total_products,
            total_orders: summary.total_orders,
            total_revenue: round_money(summary.total_revenue),
            average_order_value,
            recent_orders,
            top_products,
        })
    }

    async fn orders(&self) -> Result<Vec<Order>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders.list_recent(&mut tx, ADMIN_LIST_LIMIT).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn users(&self) -> Result<Vec<User>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let users = self.accounts.list_users(&mut tx, ADMIN_LIST_LIMIT).await?;

        tx.commit().await?;

        Ok(users)
    }

    async fn inventory(&self) -> Result<Vec<InventoryItem>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let inventory = self.catalog.list_inventory(&mut tx).await?;

        tx.commit().await?;

        Ok(inventory)
    }

    async fn audits(&self) -> Result<Vec<AuditEntry>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let audits = self.audits.list_audits(&mut tx, ADMIN_LIST_LIMIT).await?;

        tx.commit().await?;

        Ok(audits)
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Counts, revenue, the five latest orders and the five best sellers.
    async fn stats(&self) -> Result<AdminStats, ReportsServiceError>;

    /// Latest orders, newest first.
    async fn orders(&self) -> Result<Vec<Order>, ReportsServiceError>;

    /// Latest users, newest first.
    async fn users(&self) -> Result<Vec<User>, ReportsServiceError>;

    /// Name, price, stock and category of every product.
    async fn inventory(&self) -> Result<Vec<InventoryItem>, ReportsServiceError>;

    /// Latest audit entries, newest first.
    async fn audits(&self) -> Result<Vec<AuditEntry>, ReportsServiceError>;
}
