//! Products By Category Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    catalog::{errors::into_api_error, models::ProductsResponse},
    errors::ApiError,
    extensions::*,
};

/// Products By Category Handler
///
/// An unknown category yields an empty list.
#[endpoint(tags("catalog"), summary = "List Products In Category")]
pub(crate) async fn handler(
    cat: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, ApiError> {
    let products = depot
        .state()?
        .app
        .catalog
        .list_products_by_category(cat.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_product, service};

    use super::*;

    #[tokio::test]
    async fn lists_products_of_category() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .catalog
            .expect_list_products_by_category()
            .once()
            .withf(|category| category == "vitamins")
            .return_once(|_| {
                Ok(vec![
                    make_product("51", "Biotin 10000mcg", Decimal::from(180)),
                    make_product("52", "Calcium + D3", Decimal::from(95)),
                ])
            });

        let response: ProductsResponse =
            TestClient::get("http://example.com/api/products/category/vitamins")
                .send(&service(
                    mocks,
                    Router::with_path("api/products/category/{cat}").get(handler),
                ))
                .await
                .take_json()
                .await?;

        let names: Vec<_> = response.data.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["Biotin 10000mcg", "Calcium + D3"]);

        Ok(())
    }
}
