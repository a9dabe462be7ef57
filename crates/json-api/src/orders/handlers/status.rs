//! Update Order Status Handler

use pharmacy_app::domain::orders::{OrdersServiceError, models::OrderStatus};
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrderEnvelope},
};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateStatusRequest {
    /// One of `pending`, `processing`, `ready_for_shipment`, `shipped`, `delivered`,
    /// `cancelled` or `returned`
    pub status: Option<String>,
}

/// Update Order Status Handler
///
/// Any valid status may be set from any other.
#[endpoint(tags("orders"), summary = "Update Order Status")]
pub(crate) async fn handler(
    order_id: PathParam<String>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let status = json
        .into_inner()
        .status
        .ok_or(OrdersServiceError::InvalidStatus)
        .and_then(|status| status.parse::<OrderStatus>().map_err(OrdersServiceError::from))
        .map_err(into_api_error)?;

    let order = depot
        .state()?
        .app
        .orders
        .update_status(order_id.into_inner(), status)
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{errors::ErrorResponse, test_helpers::*};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        service(
            mocks,
            Router::with_path("api/orders/{order_id}/status").patch(handler),
        )
    }

    #[tokio::test]
    async fn updates_status() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_update_status()
            .once()
            .withf(|key, status| key == "ORD-1700000000000-0a1b" && *status == OrderStatus::Shipped)
            .return_once(|key, status| {
                let mut order = make_order(&key, "demo@pharmacy.com");
                order.status = status;
                Ok(order)
            });

        let response: OrderEnvelope =
            TestClient::patch("http://example.com/api/orders/ORD-1700000000000-0a1b/status")
                .json(&json!({ "status": "shipped" }))
                .send(&make_service(mocks))
                .await
                .take_json()
                .await?;

        assert_eq!(response.data.status, "shipped");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_status_returns_400_without_update() -> TestResult {
        let mut res = TestClient::patch("http://example.com/api/orders/ORD-1/status")
            .json(&json!({ "status": "lost" }))
            .send(&make_service(Mocks::default()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid status");

        Ok(())
    }

    #[tokio::test]
    async fn missing_status_returns_400() -> TestResult {
        let res = TestClient::patch("http://example.com/api/orders/ORD-1/status")
            .json(&json!({}))
            .send(&make_service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
