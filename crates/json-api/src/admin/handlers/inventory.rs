//! Admin Inventory Handler

use pharmacy_app::domain::catalog::models::InventoryItem;
use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{admin::errors::into_api_error, errors::ApiError, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InventoryItemResponse {
    pub id: Uuid,

    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub stock: i32,

    /// Category slug
    pub cat: String,
}

impl From<InventoryItem> for InventoryItemResponse {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.uuid.into_uuid(),
            name: item.name,
            price: item.price,
            stock: item.stock,
            cat: item.category,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InventoryResponse {
    pub success: bool,

    pub data: Vec<InventoryItemResponse>,
}

/// Admin Inventory Handler
#[endpoint(tags("admin"), summary = "Inventory")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<InventoryResponse>, ApiError> {
    let items = depot
        .state()?
        .app
        .reports
        .inventory()
        .await
        .map_err(into_api_error)?;

    Ok(Json(InventoryResponse {
        success: true,
        data: items.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::*;

    use super::*;

    #[tokio::test]
    async fn lists_stock_levels() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.reports.expect_inventory().once().return_once(|| {
            Ok(vec![InventoryItem {
                uuid: Default::default(),
                name: "Whey Protein 2lb".to_string(),
                price: Decimal::new(120050, 2),
                stock: 80,
                category: "fitness".to_string(),
            }])
        });

        let response: InventoryResponse = TestClient::get("http://example.com/api/admin/inventory")
            .send(&service(mocks, Router::with_path("api/admin/inventory").get(handler)))
            .await
            .take_json()
            .await?;

        let item = response.data.first().ok_or("missing item")?;

        assert_eq!(item.cat, "fitness");
        assert_eq!(item.stock, 80);

        Ok(())
    }
}
