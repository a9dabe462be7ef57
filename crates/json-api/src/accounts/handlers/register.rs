//! Register Handler

use pharmacy_app::domain::accounts::models::{Registration, User};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{accounts::errors::into_api_error, errors::ApiError, extensions::*};

/// Register Request
///
/// Fields are optional so that missing ones are reported as `Missing required fields`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct RegisterRequest {
    pub name: Option<String>,

    pub email: Option<String>,

    /// Plaintext password, at least 6 characters
    pub pass: Option<String>,

    pub phone: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Registration {
            name: request.name,
            email: request.email,
            password: request.pass,
            phone: request.phone,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisteredUser {
    pub id: Uuid,

    pub name: String,

    pub email: String,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.uuid.into_uuid(),
            name: user.full_name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterResponse {
    pub success: bool,

    pub user: RegisteredUser,
}

/// Register Handler
///
/// Creates a customer account. The email is stored lower-cased.
#[endpoint(tags("auth"), summary = "Register")]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
) -> Result<Json<RegisterResponse>, ApiError> {
    let user = depot
        .state()?
        .app
        .accounts
        .register(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(RegisterResponse {
        success: true,
        user: user.into(),
    }))
}
