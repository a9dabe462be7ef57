//! Orders service errors.

use pharmacy::DiscountError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use super::models::InvalidOrderStatus;

/// Errors raised while placing, reading or updating orders.
///
/// Validation messages are shown to the client verbatim.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("Order must contain items")]
    EmptyOrder,

    #[error("Missing shipping information")]
    MissingShipping,

    #[error("Invalid address id")]
    InvalidAddressId,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid status")]
    InvalidStatus,

    #[error("Order not found")]
    NotFound,

    #[error("order number already exists")]
    AlreadyExists,

    #[error("order pricing failed")]
    Pricing(#[from] DiscountError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<InvalidOrderStatus> for OrdersServiceError {
    fn from(_: InvalidOrderStatus) -> Self {
        Self::InvalidStatus
    }
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = OrdersServiceError::from(Error::RowNotFound);

        assert!(matches!(error, OrdersServiceError::NotFound));
    }

    #[test]
    fn bad_status_maps_to_invalid_status() {
        let error = OrdersServiceError::from(InvalidOrderStatus);

        assert_eq!(error.to_string(), "Invalid status");
    }
}
