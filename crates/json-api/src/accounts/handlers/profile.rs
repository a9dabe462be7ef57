//! Profile Handler

use pharmacy_app::domain::accounts::{
    AccountsServiceError,
    models::{User, UserUuid},
};
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{accounts::errors::into_api_error, errors::ApiError, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileResponse {
    pub id: Uuid,

    pub email: String,

    pub name: String,

    pub phone: Option<String>,

    pub role: String,

    pub is_verified: bool,

    pub created_at: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.uuid.into_uuid(),
            email: user.email,
            name: user.full_name,
            phone: user.phone,
            role: user.role,
            is_verified: user.is_verified,
            created_at: user.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileEnvelope {
    pub success: bool,

    pub data: ProfileResponse,
}

/// Profile Handler
///
/// A malformed id is reported the same way as an unknown one.
#[endpoint(tags("auth"), summary = "Get Profile")]
pub(crate) async fn handler(
    user_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let user = UserUuid::parse(&user_id.into_inner())
        .ok_or(AccountsServiceError::NotFound)
        .map_err(into_api_error)?;

    let user = depot
        .state()?
        .app
        .accounts
        .get_profile(user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProfileEnvelope {
        success: true,
        data: user.into(),
    }))
}
