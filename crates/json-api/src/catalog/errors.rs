//! Catalog Errors

use pharmacy_app::domain::catalog::CatalogServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CatalogServiceError) -> ApiError {
    match error {
        CatalogServiceError::NotFound => ApiError::not_found(error.to_string()),
        CatalogServiceError::AlreadyExists
        | CatalogServiceError::InvalidReference
        | CatalogServiceError::Sql(_) => ApiError::internal("failed to read catalog", &error),
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_product_is_404() {
        let error = into_api_error(CatalogServiceError::NotFound);

        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "Product not found");
    }

    #[test]
    fn storage_failure_is_500() {
        let error = into_api_error(CatalogServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
