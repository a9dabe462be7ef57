//! Order History Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrdersResponse},
};

/// Order History Handler
///
/// Orders placed under an email address, newest first.
#[endpoint(tags("orders"), summary = "List Orders For Email")]
pub(crate) async fn handler(
    email: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, ApiError> {
    let orders = depot
        .state()?
        .app
        .orders
        .list_orders(email.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(orders.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::*;

    use super::*;

    #[tokio::test]
    async fn lists_orders_for_email() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_list_orders()
            .once()
            .withf(|email| email == "demo@pharmacy.com")
            .return_once(|_| {
                Ok(vec![
                    make_order("ORD-1700000000002-beef", "demo@pharmacy.com"),
                    make_order("ORD-1700000000001-cafe", "demo@pharmacy.com"),
                ])
            });

        let response: OrdersResponse =
            TestClient::get("http://example.com/api/orders/demo@pharmacy.com")
                .send(&service(mocks, Router::with_path("api/orders/{email}").get(handler)))
                .await
                .take_json()
                .await?;

        let numbers: Vec<_> = response
            .data
            .iter()
            .map(|order| order.order_number.as_str())
            .collect();

        assert_eq!(numbers, ["ORD-1700000000002-beef", "ORD-1700000000001-cafe"]);
        assert!(response.data.iter().all(|order| order.items.len() == 1));

        Ok(())
    }
}
