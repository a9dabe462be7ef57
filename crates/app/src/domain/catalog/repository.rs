//! Catalog Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use pharmacy::{CartItem, CatalogProduct, ProductKey};
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::catalog::models::{
    Category, InventoryItem, NewProduct, Product, ProductQuery, ProductUuid,
};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const INSERT_CATEGORY_SQL: &str = include_str!("sql/insert_category.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_PRODUCTS_BY_CATEGORY_SQL: &str = include_str!("sql/list_products_by_category.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const FIND_PRODUCT_BY_CATALOG_ID_SQL: &str = include_str!("sql/find_product_by_catalog_id.sql");
const FIND_PRICE_CANDIDATES_SQL: &str = include_str!("sql/find_price_candidates.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const LIST_INVENTORY_SQL: &str = include_str!("sql/list_inventory.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCatalogRepository;

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        query_as::<Postgres, Category>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: Category,
    ) -> Result<Category, sqlx::Error> {
        query_as::<Postgres, Category>(INSERT_CATEGORY_SQL)
            .bind(category.id)
            .bind(category.name)
            .bind(category.icon)
            .bind(category.description)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductQuery,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(filter.category.as_deref().filter(|value| !value.is_empty()))
            .bind(filter.search.as_deref().filter(|value| !value.is_empty()))
            .bind(filter.effective_limit())
            .bind(filter.effective_offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_products_by_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_BY_CATEGORY_SQL)
            .bind(category)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Find a product by catalog identifier, exact first and then numerically.
    pub(crate) async fn find_product_by_catalog_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(FIND_PRODUCT_BY_CATALOG_ID_SQL)
            .bind(id)
            .bind(pharmacy::catalog::numeric_id(id))
            .fetch_optional(&mut **tx)
            .await
    }

    /// Every product any of the cart item's lookup keys could refer to.
    pub(crate) async fn find_price_candidates(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: &CartItem,
    ) -> Result<Vec<CatalogProduct>, sqlx::Error> {
        let mut id: Option<String> = None;
        let mut numeric: Option<Decimal> = None;
        let mut uuid: Option<Uuid> = None;
        let mut name: Option<String> = None;

        for key in ProductKey::for_item(item) {
            match key {
                ProductKey::Id(value) => id = Some(value),
                ProductKey::NumericId(value) => numeric = Some(value),
                ProductKey::Uuid(value) => uuid = Some(value),
                ProductKey::Name(value) => name = Some(value),
            }
        }

        if id.is_none() && name.is_none() {
            return Ok(Vec::new());
        }

        let rows: Vec<(Uuid, String, String, Decimal)> = query_as(FIND_PRICE_CANDIDATES_SQL)
            .bind(id)
            .bind(numeric)
            .bind(uuid)
            .bind(name)
            .fetch_all(&mut **tx)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(uuid, id, name, price)| CatalogProduct {
                uuid,
                id,
                name,
                price,
            })
            .collect())
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(INSERT_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.id)
            .bind(product.name)
            .bind(product.price)
            .bind(product.category)
            .bind(product.stock)
            .bind(product.rx)
            .bind(product.description)
            .bind(product.sku)
            .bind(product.manufacturer)
            .bind(product.image_url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_inventory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<InventoryItem>, sqlx::Error> {
        query_as::<Postgres, InventoryItem>(LIST_INVENTORY_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_PRODUCTS_SQL).fetch_one(&mut **tx).await
    }
}

impl<'r> FromRow<'r, PgRow> for Category {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            icon: row.try_get("icon")?,
            description: row.try_get("description")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
            stock: row.try_get("stock")?,
            rx: row.try_get("rx")?,
            description: row.try_get("description")?,
            sku: row.try_get("sku")?,
            manufacturer: row.try_get("manufacturer")?,
            image_url: row.try_get("image_url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for InventoryItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            stock: row.try_get("stock")?,
            category: row.try_get("category")?,
        })
    }
}
