//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{errors::into_api_error, models::ProductResponse},
    errors::ApiError,
    extensions::*,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductEnvelope {
    pub success: bool,

    pub data: ProductResponse,
}

/// Get Product Handler
///
/// Looks the product up by internal UUID, then by catalog identifier.
#[endpoint(tags("catalog"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let product = depot
        .state()?
        .app
        .catalog
        .get_product(id.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductEnvelope {
        success: true,
        data: product.into(),
    }))
}
