//! Admin Errors

use pharmacy_app::domain::reports::ReportsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ReportsServiceError) -> ApiError {
    ApiError::internal("failed to build report", &error)
}
