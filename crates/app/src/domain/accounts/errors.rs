//! Accounts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Errors raised by account registration, login and profile lookups.
///
/// Validation messages are shown to the client verbatim.
#[derive(Debug, Error)]
pub enum AccountsServiceError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Missing email or password")]
    MissingCredentials,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    NotFound,

    #[error("password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AccountsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::EmailTaken,
            Some(_) | None => Self::Sql(error),
        }
    }
}

impl From<argon2::password_hash::Error> for AccountsServiceError {
    fn from(error: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(error)
    }
}
