//! Product Index Handler

use pharmacy_app::domain::catalog::models::ProductQuery;
use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    catalog::{errors::into_api_error, models::ProductsResponse},
    errors::ApiError,
    extensions::*,
};

/// Unparseable numbers are ignored rather than rejected.
fn lenient_number(param: QueryParam<String, false>) -> Option<i64> {
    param
        .into_inner()
        .and_then(|value| value.trim().parse().ok())
}

fn non_blank(param: QueryParam<String, false>) -> Option<String> {
    param.into_inner().filter(|value| !value.trim().is_empty())
}

/// Product Index Handler
///
/// Returns the catalog sorted by category then name. Without a `limit` the whole catalog
/// is returned; larger limits are capped at 1000.
#[endpoint(tags("catalog"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    search: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    offset: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, ApiError> {
    let filter = ProductQuery {
        category: non_blank(category),
        search: non_blank(search),
        limit: lenient_number(limit),
        offset: lenient_number(offset),
    };

    let products = depot
        .state()?
        .app
        .catalog
        .list_products(filter)
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into()))
}
