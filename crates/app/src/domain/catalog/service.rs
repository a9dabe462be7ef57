//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::catalog::{
        errors::CatalogServiceError,
        models::{Category, Product, ProductQuery, ProductUuid},
        repository::PgCatalogRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    repository: PgCatalogRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn list_products(
        &self,
        filter: ProductQuery,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn list_products_by_category(
        &self,
        category: String,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products_by_category(&mut tx, &category)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, key: String) -> Result<Product, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let by_uuid = match ProductUuid::parse(&key) {
            Some(uuid) => self.repository.get_product(&mut tx, uuid).await?,
            None => None,
        };

        let product = match by_uuid {
            Some(product) => Some(product),
            None => {
                self.repository
                    .find_product_by_catalog_id(&mut tx, key.trim())
                    .await?
            }
        };

        tx.commit().await?;

        product.ok_or(CatalogServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError>;

    /// Filtered products, ordered by category then name.
    async fn list_products(&self, filter: ProductQuery)
    -> Result<Vec<Product>, CatalogServiceError>;

    /// Products of one category, ordered by name.
    async fn list_products_by_category(
        &self,
        category: String,
    ) -> Result<Vec<Product>, CatalogServiceError>;

    /// A product by internal UUID, falling back to its catalog identifier.
    async fn get_product(&self, key: String) -> Result<Product, CatalogServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::create_product};

    use super::*;

    #[tokio::test]
    async fn list_categories_sorted_by_name() -> TestResult {
        let ctx = TestContext::new().await;

        let names: Vec<String> = ctx
            .catalog
            .list_categories()
            .await?
            .into_iter()
            .map(|category| category.name)
            .collect();

        assert_eq!(names, ["Fitness", "Vitamins"]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_filters_by_category_and_search() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "1", "Vitamin C 1000mg", "vitamins", Decimal::from(10)).await?;
        create_product(&ctx, "2", "Zinc 50mg", "vitamins", Decimal::from(8)).await?;
        create_product(&ctx, "3", "Creatine Monohydrate", "fitness", Decimal::from(30)).await?;

        let vitamins = ctx
            .catalog
            .list_products(ProductQuery {
                category: Some("vitamins".to_string()),
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(vitamins.len(), 2);

        let searched = ctx
            .catalog
            .list_products(ProductQuery {
                search: Some("vitamin".to_string()),
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(searched.len(), 1);
        assert_eq!(
            searched.first().map(|product| product.id.as_str()),
            Some("1")
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_sorted_and_paged() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "1", "Zinc 50mg", "vitamins", Decimal::from(8)).await?;
        create_product(&ctx, "2", "Biotin 10mg", "vitamins", Decimal::from(9)).await?;
        create_product(&ctx, "3", "Whey Protein", "fitness", Decimal::from(50)).await?;

        let all: Vec<String> = ctx
            .catalog
            .list_products(ProductQuery::default())
            .await?
            .into_iter()
            .map(|product| product.name)
            .collect();

        assert_eq!(all, ["Whey Protein", "Biotin 10mg", "Zinc 50mg"]);

        let page = ctx
            .catalog
            .list_products(ProductQuery {
                limit: Some(1),
                offset: Some(1),
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(page.len(), 1);
        assert_eq!(
            page.first().map(|product| product.name.as_str()),
            Some("Biotin 10mg")
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_by_uuid_and_by_numeric_id() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_product(&ctx, "7", "Melatonin 5mg", "vitamins", Decimal::from(11)).await?;

        let by_uuid = ctx.catalog.get_product(created.uuid.to_string()).await?;
        let by_id = ctx.catalog.get_product("007".to_string()).await?;

        assert_eq!(by_uuid.uuid, created.uuid);
        assert_eq!(by_id.uuid, created.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_missing_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.catalog.get_product("999".to_string()).await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_by_category_sorted_by_name() -> TestResult {
        let ctx = TestContext::new().await;

        create_product(&ctx, "1", "Zinc 50mg", "vitamins", Decimal::from(8)).await?;
        create_product(&ctx, "2", "Biotin 10mg", "vitamins", Decimal::from(9)).await?;
        create_product(&ctx, "3", "Whey Protein", "fitness", Decimal::from(50)).await?;

        let names: Vec<String> = ctx
            .catalog
            .list_products_by_category("vitamins".to_string())
            .await?
            .into_iter()
            .map(|product| product.name)
            .collect();

        assert_eq!(names, ["Biotin 10mg", "Zinc 50mg"]);

        Ok(())
    }
}
