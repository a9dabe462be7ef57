//! Order Errors

use pharmacy_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::EmptyOrder
        | OrdersServiceError::MissingShipping
        | OrdersServiceError::InvalidAddressId
        | OrdersServiceError::UserNotFound
        | OrdersServiceError::InvalidStatus => ApiError::bad_request(error.to_string()),
        OrdersServiceError::NotFound => ApiError::not_found(error.to_string()),
        OrdersServiceError::AlreadyExists
        | OrdersServiceError::Pricing(_)
        | OrdersServiceError::Sql(_) => ApiError::internal("order operation failed", &error),
    }
}
