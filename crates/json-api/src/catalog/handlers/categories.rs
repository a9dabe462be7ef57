//! Category Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{errors::into_api_error, models::CategoryResponse},
    errors::ApiError,
    extensions::*,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    pub success: bool,

    /// Every category, ordered by name
    pub data: Vec<CategoryResponse>,
}

/// Category Index Handler
#[endpoint(tags("catalog"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = depot
        .state()?
        .app
        .catalog
        .list_categories()
        .await
        .map_err(into_api_error)?;

    Ok(Json(CategoriesResponse {
        success: true,
        data: categories.into_iter().map(Into::into).collect(),
    }))
}
