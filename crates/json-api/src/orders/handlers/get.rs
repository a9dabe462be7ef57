//! Get Order Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrderEnvelope},
};

/// Get Order Handler
///
/// Looks the order up by internal id, then by order number.
#[endpoint(tags("orders"), summary = "Get Order")]
pub(crate) async fn handler(
    order_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let order = depot
        .state()?
        .app
        .orders
        .get_order(order_id.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use pharmacy_app::domain::orders::OrdersServiceError;
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{errors::ErrorResponse, test_helpers::*};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        service(mocks, Router::with_path("api/orders/id/{order_id}").get(handler))
    }

    #[tokio::test]
    async fn returns_order_by_number() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_get_order()
            .once()
            .withf(|key| key == "ORD-1700000000000-0a1b")
            .return_once(|key| Ok(make_order(&key, "demo@pharmacy.com")));

        let response: OrderEnvelope =
            TestClient::get("http://example.com/api/orders/id/ORD-1700000000000-0a1b")
                .send(&make_service(mocks))
                .await
                .take_json()
                .await?;

        assert_eq!(response.data.order_number, "ORD-1700000000000-0a1b");
        assert_eq!(response.data.total, Decimal::new(2100, 2));
        assert_eq!(response.data.card_last_four, "1234");

        Ok(())
    }

    #[tokio::test]
    async fn missing_order_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/api/orders/id/ORD-0-0000")
            .send(&make_service(mocks))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Order not found");

        Ok(())
    }
}
