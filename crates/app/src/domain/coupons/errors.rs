//! Coupons service errors.

use pharmacy::{CouponPreviewError, CouponRejection, DiscountError};
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CouponsServiceError {
    /// The coupon cannot be redeemed; the message is shown to the shopper.
    #[error(transparent)]
    Rejected(#[from] CouponRejection),

    #[error("discount calculation failed")]
    Discount(#[from] DiscountError),

    #[error("coupon already exists")]
    AlreadyExists,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<CouponPreviewError> for CouponsServiceError {
    fn from(error: CouponPreviewError) -> Self {
        match error {
            CouponPreviewError::Rejected(rejection) => Self::Rejected(rejection),
            CouponPreviewError::Discount(error) => Self::Discount(error),
        }
    }
}

impl From<Error> for CouponsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}
