//! Route labels for spans and metrics.

use uuid::Uuid;

/// Path segments that are part of a route rather than a caller-supplied key.
const ROUTE_SEGMENTS: [&str; 25] = [
    "addresses",
    "admin",
    "api",
    "api-doc",
    "audits",
    "auth",
    "categories",
    "category",
    "coupons",
    "docs",
    "health",
    "id",
    "inventory",
    "login",
    "metrics",
    "openapi.json",
    "orders",
    "products",
    "profile",
    "register",
    "stats",
    "status",
    "users",
    "validate",
    "",
];

/// Collapse caller-supplied keys in `path` so labels stay low-cardinality.
///
/// UUIDs become `{uuid}`; emails, order numbers, catalog ids and category slugs become
/// `{id}`.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut label = String::new();

    for segment in path.trim_start_matches('/').split('/') {
        label.push('/');

        if ROUTE_SEGMENTS.contains(&segment) {
            label.push_str(segment);
        } else if Uuid::parse_str(segment).is_ok() {
            label.push_str("{uuid}");
        } else {
            label.push_str("{id}");
        }
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_uuids() {
        let uuid = Uuid::now_v7();

        assert_eq!(
            route_label(&format!("/api/auth/profile/{uuid}")),
            "/api/auth/profile/{uuid}"
        );
    }

    #[test]
    fn collapses_order_numbers_emails_and_slugs() {
        assert_eq!(
            route_label("/api/orders/id/ORD-1700000000000-0A1F"),
            "/api/orders/id/{id}"
        );
        assert_eq!(route_label("/api/orders/demo@example.com"), "/api/orders/{id}");
        assert_eq!(
            route_label("/api/orders/ORD-1700000000000-0A1F/status"),
            "/api/orders/{id}/status"
        );
        assert_eq!(
            route_label("/api/products/category/vitamins"),
            "/api/products/category/{id}"
        );
    }

    #[test]
    fn keeps_fixed_routes() {
        assert_eq!(route_label("/api/products"), "/api/products");
        assert_eq!(route_label("/api/admin/stats"), "/api/admin/stats");
        assert_eq!(route_label("/"), "/");
    }
}
