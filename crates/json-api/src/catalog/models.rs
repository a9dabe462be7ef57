//! Catalog response bodies.

use pharmacy_app::domain::catalog::models::{Category, Product};
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// Slug, e.g. `vitamins`
    pub id: String,

    pub name: String,

    pub icon: Option<String>,

    pub description: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            icon: category.icon,
            description: category.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Internal identifier
    pub uuid: Uuid,

    /// Catalog identifier, e.g. `"17"`
    pub id: String,

    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Category slug
    #[serde(rename = "cat")]
    pub category: String,

    pub stock: i32,

    /// Whether a prescription is required
    pub rx: bool,

    #[serde(rename = "desc")]
    pub description: Option<String>,

    pub sku: Option<String>,

    pub manufacturer: Option<String>,

    pub image_url: Option<String>,

    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid.into_uuid(),
            id: product.id,
            name: product.name,
            price: product.price,
            category: product.category,
            stock: product.stock,
            rx: product.rx,
            description: product.description,
            sku: product.sku,
            manufacturer: product.manufacturer,
            image_url: product.image_url,
            created_at: product.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    pub success: bool,

    pub data: Vec<ProductResponse>,
}

impl From<Vec<Product>> for ProductsResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            success: true,
            data: products.into_iter().map(Into::into).collect(),
        }
    }
}

