//! Admin Order Index Handler

use salvo::prelude::*;

use crate::{
    admin::errors::into_api_error, errors::ApiError, extensions::*,
    orders::models::OrdersResponse,
};

/// Admin Order Index Handler
///
/// The 200 most recently placed orders.
#[endpoint(tags("admin"), summary = "List Recent Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, ApiError> {
    let orders = depot
        .state()?
        .app
        .reports
        .orders()
        .await
        .map_err(into_api_error)?;

    Ok(Json(orders.into()))
}
