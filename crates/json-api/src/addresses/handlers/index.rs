//! Address Index Handler

use pharmacy_app::domain::{accounts::models::UserUuid, addresses::AddressesServiceError};
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    addresses::{errors::into_api_error, models::AddressResponse},
    errors::ApiError,
    extensions::*,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressesResponse {
    pub success: bool,

    /// Default address first, then newest first
    pub data: Vec<AddressResponse>,
}

/// Address Index Handler
#[endpoint(tags("addresses"), summary = "List Addresses")]
pub(crate) async fn handler(
    user_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<AddressesResponse>, ApiError> {
    let user = UserUuid::parse(&user_id.into_inner())
        .ok_or(AddressesServiceError::InvalidUserId)
        .map_err(into_api_error)?;

    let addresses = depot
        .state()?
        .app
        .addresses
        .list_addresses(user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(AddressesResponse {
        success: true,
        data: addresses.into_iter().map(Into::into).collect(),
    }))
}
