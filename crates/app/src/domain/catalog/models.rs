//! Catalog Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Largest page a product listing may request.
pub const MAX_PRODUCT_LIMIT: i64 = 1_000;

/// Category Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Slug, e.g. `vitamins`.
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// Product Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub uuid: ProductUuid,

    /// Catalog identifier the storefront uses (`"1"`, `"P1"`, ...).
    pub id: String,
    pub name: String,
    pub price: Decimal,

    /// Category slug.
    pub category: String,
    pub stock: i32,

    /// Prescription only.
    pub rx: bool,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub manufacturer: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// Product listing filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Exact category slug.
    pub category: Option<String>,

    /// Case-insensitive substring of the name or description.
    pub search: Option<String>,

    /// Page size; absent or non-positive means the whole catalog.
    pub limit: Option<i64>,

    /// Rows to skip.
    pub offset: Option<i64>,
}

impl ProductQuery {
    /// Page size to apply, capped at [`MAX_PRODUCT_LIMIT`].
    pub fn effective_limit(&self) -> Option<i64> {
        self.limit
            .filter(|limit| *limit > 0)
            .map(|limit| limit.min(MAX_PRODUCT_LIMIT))
    }

    /// Rows to skip, never negative.
    pub fn effective_offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// A product row to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewProduct {
    pub uuid: ProductUuid,
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub stock: i32,
    pub rx: bool,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub manufacturer: Option<String>,
    pub image_url: Option<String>,
}

/// Stock overview row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub category: String,
}
