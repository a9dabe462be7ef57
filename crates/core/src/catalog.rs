//! Catalog lookup keys.

use std::str::FromStr;

use rust_decimal::Decimal;
use smallvec::SmallVec;
use uuid::Uuid;

use crate::cart::CartItem;

/// The slice of a catalog product the pricing engine needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProduct {
    /// Internal storage identifier.
    pub uuid: Uuid,

    /// Catalog identifier as the storefront knows it (`"12"`, `"P1"`, ...).
    pub id: String,

    /// Product name.
    pub name: String,

    /// Unit price.
    pub price: Decimal,
}

/// One way of matching a cart item against the catalog.
///
/// Keys are tried in declaration order; the first key that matches a product wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
    /// Exact catalog identifier.
    Id(String),

    /// Catalog identifier compared numerically (`"01"` matches `"1"`).
    NumericId(Decimal),

    /// Internal storage identifier.
    Uuid(Uuid),

    /// Exact product name.
    Name(String),
}

impl ProductKey {
    /// Build the ordered list of keys for a cart item.
    pub fn for_item(item: &CartItem) -> SmallVec<[ProductKey; 4]> {
        let mut keys = SmallVec::new();

        if let Some(id) = item.id() {
            keys.push(Self::Id(id.to_string()));

            if let Some(numeric) = numeric_id(id) {
                keys.push(Self::NumericId(numeric));
            }

            if let Ok(uuid) = Uuid::parse_str(id.trim()) {
                keys.push(Self::Uuid(uuid));
            }
        }

        if let Some(name) = item.name() {
            keys.push(Self::Name(name.to_string()));
        }

        keys
    }

    /// Whether this key identifies the given product.
    pub fn matches(&self, product: &CatalogProduct) -> bool {
        match self {
            Self::Id(id) => product.id == *id,
            Self::NumericId(numeric) => numeric_id(&product.id) == Some(*numeric),
            Self::Uuid(uuid) => product.uuid == *uuid,
            Self::Name(name) => product.name == *name,
        }
    }
}

/// Parse an identifier as a number, the way a storefront would coerce `"007"` to `7`.
pub fn numeric_id(id: &str) -> Option<Decimal> {
    let trimmed = id.trim();

    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_ignored| Decimal::from_scientific(trimmed))
        .ok()
        .map(|value| value.normalize())
}

/// Find the best catalog match for a cart item among a set of candidates.
pub fn find_match<'p>(
    item: &CartItem,
    candidates: &'p [CatalogProduct],
) -> Option<&'p CatalogProduct> {
    ProductKey::for_item(item)
        .iter()
        .find_map(|key| candidates.iter().find(|product| key.matches(product)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: Decimal) -> CatalogProduct {
        CatalogProduct {
            uuid: Uuid::now_v7(),
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }

    fn item(id: Option<&str>, name: Option<&str>) -> CartItem {
        CartItem {
            id: id.map(ToString::to_string),
            name: name.map(ToString::to_string),
            price: None,
            qty: None,
        }
    }

    #[test]
    fn keys_are_ordered_id_numeric_uuid_name() {
        let keys = ProductKey::for_item(&item(Some("7"), Some("Zinc 50mg")));

        assert_eq!(
            keys.as_slice(),
            &[
                ProductKey::Id("7".to_string()),
                ProductKey::NumericId(Decimal::from(7)),
                ProductKey::Name("Zinc 50mg".to_string()),
            ]
        );
    }

    #[test]
    fn uuid_identifier_produces_uuid_key() {
        let uuid = Uuid::now_v7();
        let keys = ProductKey::for_item(&item(Some(&uuid.to_string()), None));

        assert_eq!(
            keys.as_slice(),
            &[ProductKey::Id(uuid.to_string()), ProductKey::Uuid(uuid)]
        );
    }

    #[test]
    fn item_without_id_or_name_has_no_keys() {
        assert!(ProductKey::for_item(&item(None, None)).is_empty());
    }

    #[test]
    fn numeric_id_ignores_leading_zeros_and_scale() {
        assert_eq!(numeric_id("007"), Some(Decimal::from(7)));
        assert_eq!(numeric_id("7.0"), Some(Decimal::from(7)));
        assert_eq!(numeric_id(" 12 "), Some(Decimal::from(12)));
        assert_eq!(numeric_id("P1"), None);
        assert_eq!(numeric_id(""), None);
    }

    #[test]
    fn exact_id_beats_name_match() {
        let by_name = product("2", "Vitamin C 1000mg", Decimal::from(9));
        let by_id = product("P1", "Something Else", Decimal::from(10));
        let candidates = [by_name, by_id.clone()];

        let found = find_match(&item(Some("P1"), Some("Vitamin C 1000mg")), &candidates);

        assert_eq!(found, Some(&by_id));
    }

    #[test]
    fn numeric_coercion_matches_padded_identifier() {
        let wanted = product("12", "Omega-3 Fish Oil", Decimal::from(20));
        let candidates = [wanted.clone()];

        assert_eq!(find_match(&item(Some("012"), None), &candidates), Some(&wanted));
    }

    #[test]
    fn uuid_match_used_when_catalog_id_differs() {
        let wanted = product("40", "Creatine Monohydrate", Decimal::from(30));
        let candidates = [wanted.clone()];
        let lookup = item(Some(&wanted.uuid.to_string()), None);

        assert_eq!(find_match(&lookup, &candidates), Some(&wanted));
    }

    #[test]
    fn name_is_the_last_resort() {
        let wanted = product("3", "Melatonin 5mg", Decimal::from(11));
        let candidates = [wanted.clone()];

        assert_eq!(
            find_match(&item(Some("unknown"), Some("Melatonin 5mg")), &candidates),
            Some(&wanted)
        );
    }

    #[test]
    fn no_candidates_no_match() {
        assert_eq!(find_match(&item(Some("1"), Some("Aspirin 81mg")), &[]), None);
    }
}
