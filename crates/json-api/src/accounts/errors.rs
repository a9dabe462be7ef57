//! Account Errors

use pharmacy_app::domain::accounts::AccountsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AccountsServiceError) -> ApiError {
    match error {
        AccountsServiceError::MissingFields
        | AccountsServiceError::NameTooShort
        | AccountsServiceError::InvalidEmail
        | AccountsServiceError::PasswordTooShort
        | AccountsServiceError::EmailTaken
        | AccountsServiceError::MissingCredentials => ApiError::bad_request(error.to_string()),
        AccountsServiceError::InvalidCredentials => ApiError::unauthorized(error.to_string()),
        AccountsServiceError::NotFound => ApiError::not_found(error.to_string()),
        AccountsServiceError::PasswordHash(_) | AccountsServiceError::Sql(_) => {
            ApiError::internal("account operation failed", &error)
        }
    }
}
