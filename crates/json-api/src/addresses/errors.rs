//! Address Errors

use pharmacy_app::domain::addresses::AddressesServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AddressesServiceError) -> ApiError {
    match error {
        AddressesServiceError::MissingFields
        | AddressesServiceError::InvalidUserId
        | AddressesServiceError::UserNotFound => ApiError::bad_request(error.to_string()),
        AddressesServiceError::Sql(_) => ApiError::internal("address operation failed", &error),
    }
}
