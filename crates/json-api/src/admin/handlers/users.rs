//! Admin User Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    accounts::profile::ProfileResponse, admin::errors::into_api_error, errors::ApiError,
    extensions::*,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsersResponse {
    pub success: bool,

    pub data: Vec<ProfileResponse>,
}

/// Admin User Index Handler
///
/// The 200 newest users. Password hashes never leave the store.
#[endpoint(tags("admin"), summary = "List Users")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UsersResponse>, ApiError> {
    let users = depot
        .state()?
        .app
        .reports
        .users()
        .await
        .map_err(into_api_error)?;

    Ok(Json(UsersResponse {
        success: true,
        data: users.into_iter().map(Into::into).collect(),
    }))
}
