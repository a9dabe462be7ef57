//! Login Handler

use pharmacy_app::domain::accounts::models::{Credentials, User};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{accounts::errors::into_api_error, errors::ApiError, extensions::*};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct LoginRequest {
    pub email: Option<String>,

    pub pass: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoggedInUser {
    pub id: Uuid,

    pub name: String,

    pub email: String,

    pub phone: Option<String>,

    pub is_verified: bool,

    pub created_at: String,
}

impl From<User> for LoggedInUser {
    fn from(user: User) -> Self {
        Self {
            id: user.uuid.into_uuid(),
            name: user.full_name,
            email: user.email,
            phone: user.phone,
            is_verified: user.is_verified,
            created_at: user.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub success: bool,

    pub user: LoggedInUser,
}

/// Login Handler
///
/// Checks the password against the stored hash and records a `user_login` audit entry.
#[endpoint(tags("auth"), summary = "Login")]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = json.into_inner();

    let user = depot
        .state()?
        .app
        .accounts
        .login(Credentials {
            email: request.email,
            password: request.pass,
        })
        .await
        .map_err(into_api_error)?;

    Ok(Json(LoginResponse {
        success: true,
        user: user.into(),
    }))
}
