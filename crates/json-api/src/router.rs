//! App Router

use salvo::prelude::*;

use crate::{accounts, addresses, admin, catalog, coupons, errors::ApiError, health, orders};

pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("health").get(health::handler))
        .push(Router::with_path("categories").get(catalog::categories::handler))
        .push(
            Router::with_path("products")
                .get(catalog::index::handler)
                .push(Router::with_path("category/{cat}").get(catalog::by_category::handler))
                .push(Router::with_path("{id}").get(catalog::get::handler)),
        )
        .push(
            Router::with_path("auth")
                .push(Router::with_path("register").post(accounts::register::handler))
                .push(Router::with_path("login").post(accounts::login::handler))
                .push(Router::with_path("profile/{user_id}").get(accounts::profile::handler)),
        )
        .push(
            Router::with_path("addresses")
                .post(addresses::create::handler)
                .push(Router::with_path("{user_id}").get(addresses::index::handler)),
        )
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(Router::with_path("id/{order_id}").get(orders::get::handler))
                .push(Router::with_path("{order_id}/status").patch(orders::status::handler))
                .push(Router::with_path("{email}").get(orders::index::handler)),
        )
        .push(Router::with_path("coupons/validate").post(coupons::validate::handler))
        .push(
            Router::with_path("admin")
                .push(Router::with_path("orders").get(admin::orders::handler))
                .push(Router::with_path("stats").get(admin::stats::handler))
                .push(Router::with_path("users").get(admin::users::handler))
                .push(Router::with_path("inventory").get(admin::inventory::handler))
                .push(Router::with_path("audits").get(admin::audits::handler)),
        )
}

/// Matches anything the routes pushed before it did not, including wrong methods.
pub(crate) fn fallback_router() -> Router {
    Router::with_path("{**rest}").goal(endpoint_not_found)
}

#[handler]
async fn endpoint_not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}
