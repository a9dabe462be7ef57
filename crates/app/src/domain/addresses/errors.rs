//! Addresses service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressesServiceError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid user id")]
    InvalidUserId,

    #[error("User not found")]
    UserNotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AddressesServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::UserNotFound,
            Some(_) | None => Self::Sql(error),
        }
    }
}
