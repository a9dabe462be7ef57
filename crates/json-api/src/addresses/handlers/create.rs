//! Create Address Handler

use pharmacy_app::domain::addresses::models::NewAddress;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    addresses::{errors::into_api_error, models::AddressResponse},
    errors::ApiError,
    extensions::*,
};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CreateAddressRequest {
    /// Owner's user id
    pub user_id: Option<String>,

    pub label: Option<String>,

    /// Required
    pub line1: Option<String>,

    pub line2: Option<String>,

    pub city: Option<String>,

    pub state: Option<String>,

    pub postal_code: Option<String>,

    pub country: Option<String>,

    pub phone: Option<String>,

    /// Makes this the only default address of the user
    pub is_default: Option<bool>,
}

impl From<CreateAddressRequest> for NewAddress {
    fn from(request: CreateAddressRequest) -> Self {
        NewAddress {
            user_id: request.user_id,
            label: request.label,
            line1: request.line1,
            line2: request.line2,
            city: request.city,
            state: request.state,
            postal_code: request.postal_code,
            country: request.country,
            phone: request.phone,
            is_default: request.is_default.unwrap_or(false),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressCreatedResponse {
    pub success: bool,

    pub data: AddressResponse,
}

/// Create Address Handler
#[endpoint(tags("addresses"), summary = "Add Address")]
pub(crate) async fn handler(
    json: JsonBody<CreateAddressRequest>,
    depot: &mut Depot,
) -> Result<Json<AddressCreatedResponse>, ApiError> {
    let address = depot
        .state()?
        .app
        .addresses
        .add_address(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(AddressCreatedResponse {
        success: true,
        data: address.into(),
    }))
}

#[cfg(test)]
mod tests {
    use pharmacy_app::domain::{accounts::models::UserUuid, addresses::AddressesServiceError};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        addresses::handlers::tests::make_address, errors::ErrorResponse, test_helpers::*,
    };

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        service(mocks, Router::with_path("api/addresses").post(handler))
    }

    #[tokio::test]
    async fn creates_default_address() -> TestResult {
        let mut mocks = Mocks::default();
        let user = UserUuid::new();
        let user_id = user.to_string();

        mocks
            .addresses
            .expect_add_address()
            .once()
            .withf(move |address| {
                address.user_id.as_deref() == Some(user_id.as_str())
                    && address.postal_code.as_deref() == Some("11511")
                    && address.is_default
            })
            .return_once(move |_| Ok(make_address(user, "12 Tahrir St", true)));

        let response: AddressCreatedResponse = TestClient::post("http://example.com/api/addresses")
            .json(&json!({
                "userId": user.to_string(),
                "line1": "12 Tahrir St",
                "postalCode": "11511",
                "isDefault": true
            }))
            .send(&make_service(mocks))
            .await
            .take_json()
            .await?;

        assert!(response.data.is_default);
        assert_eq!(response.data.user_id, user.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn missing_line1_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .addresses
            .expect_add_address()
            .once()
            .withf(|address| address.line1.is_none() && !address.is_default)
            .return_once(|_| Err(AddressesServiceError::MissingFields));

        let mut res = TestClient::post("http://example.com/api/addresses")
            .json(&json!({ "userId": UserUuid::new().to_string() }))
            .send(&make_service(mocks))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Missing required fields");

        Ok(())
    }
}
