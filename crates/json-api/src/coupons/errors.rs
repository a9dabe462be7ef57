//! Coupon Errors

use pharmacy_app::domain::coupons::CouponsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CouponsServiceError) -> ApiError {
    match error {
        CouponsServiceError::Rejected(rejection) => ApiError::bad_request(rejection.to_string()),
        CouponsServiceError::Discount(_)
        | CouponsServiceError::AlreadyExists
        | CouponsServiceError::Sql(_) => ApiError::internal("coupon validation failed", &error),
    }
}
