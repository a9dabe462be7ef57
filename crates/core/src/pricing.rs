//! Order pricing

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    cart::CartItem,
    catalog::{CatalogProduct, find_match},
    coupons::Coupon,
    discounts::DiscountError,
    orders::{OrderLine, OrderTotals, PricedOrder},
};

/// Resolve the unit price charged for a cart item.
///
/// A non-zero client price is used verbatim and the catalog is not consulted. Otherwise the
/// best match among `candidates` supplies the price, and an unmatched item is priced at zero.
pub fn resolve_line(item: &CartItem, candidates: &[CatalogProduct]) -> OrderLine {
    let (price, matched) = match item.client_price() {
        Some(price) => (price, None),
        None => {
            let matched = find_match(item, candidates);

            (
                matched.map_or(Decimal::ZERO, |product| product.price),
                matched,
            )
        }
    };

    OrderLine {
        id: item
            .id()
            .map(ToString::to_string)
            .or_else(|| matched.map(|product| product.uuid.to_string())),
        name: item
            .name()
            .map(ToString::to_string)
            .or_else(|| matched.map(|product| product.name.clone())),
        price,
        qty: item.quantity(),
    }
}

/// Total up resolved lines and apply `coupon` when the order qualifies for it.
///
/// A coupon the order does not qualify for is ignored rather than reported.
///
/// # Errors
///
/// Returns [`DiscountError::Overflow`] if any amount overflows.
pub fn price_order(
    lines: Vec<OrderLine>,
    coupon: Option<&Coupon>,
    now: Timestamp,
) -> Result<PricedOrder, DiscountError> {
    let subtotal = lines.iter().try_fold(Decimal::ZERO, |subtotal, line| {
        subtotal
            .checked_add(line.total()?)
            .ok_or(DiscountError::Overflow)
    })?;

    let coupon = coupon.filter(|coupon| coupon.applies_to_order(now, subtotal));

    let discount = match coupon {
        Some(coupon) => coupon.discount_for(subtotal)?,
        None => Decimal::ZERO,
    };

    let totals = OrderTotals::new(subtotal, discount, Decimal::ZERO, Decimal::ZERO)?;

    Ok(PricedOrder {
        lines,
        totals,
        applied_coupon: coupon.map(|coupon| coupon.code.clone()),
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use uuid::Uuid;

    use super::*;
    use crate::coupons::DiscountType;

    fn vitamin_c() -> CatalogProduct {
        CatalogProduct {
            uuid: Uuid::now_v7(),
            id: "P1".to_string(),
            name: "Vitamin C 1000mg".to_string(),
            price: Decimal::from(10),
        }
    }

    fn line(price: i64, qty: u32) -> OrderLine {
        OrderLine {
            id: None,
            name: None,
            price: Decimal::from(price),
            qty,
        }
    }

    #[test]
    fn client_price_is_used_verbatim() {
        let item = CartItem {
            id: Some("P1".to_string()),
            price: Some(Decimal::new(7_99, 2)),
            ..CartItem::default()
        };

        let resolved = resolve_line(&item, &[vitamin_c()]);

        assert_eq!(resolved.price, Decimal::new(7_99, 2));
        assert_eq!(resolved.name, None, "catalog is not consulted");
    }

    #[test]
    fn missing_price_falls_back_to_catalog() {
        let product = vitamin_c();
        let item = CartItem {
            id: Some("P1".to_string()),
            qty: Some(2),
            ..CartItem::default()
        };

        let resolved = resolve_line(&item, &[product.clone()]);

        assert_eq!(
            resolved,
            OrderLine {
                id: Some("P1".to_string()),
                name: Some(product.name),
                price: Decimal::from(10),
                qty: 2,
            }
        );
    }

    #[test]
    fn name_match_fills_in_storage_id() {
        let product = vitamin_c();
        let item = CartItem {
            name: Some("Vitamin C 1000mg".to_string()),
            ..CartItem::default()
        };

        let resolved = resolve_line(&item, &[product.clone()]);

        assert_eq!(resolved.id, Some(product.uuid.to_string()));
        assert_eq!(resolved.price, Decimal::from(10));
    }

    #[test]
    fn unmatched_item_is_priced_at_zero() {
        let item = CartItem {
            id: Some("nope".to_string()),
            ..CartItem::default()
        };

        let resolved = resolve_line(&item, &[vitamin_c()]);

        assert_eq!(resolved.price, Decimal::ZERO);
        assert_eq!(resolved.qty, 1);
    }

    #[test]
    fn order_without_coupon() -> TestResult {
        let priced = price_order(vec![line(10, 2), line(5, 1)], None, Timestamp::now())?;

        assert_eq!(priced.totals.subtotal, Decimal::from(25));
        assert_eq!(priced.totals.discount, Decimal::ZERO);
        assert_eq!(priced.totals.total, Decimal::from(25));
        assert_eq!(priced.applied_coupon, None);

        Ok(())
    }

    #[test]
    fn order_below_minimum_ignores_coupon() -> TestResult {
        let coupon = Coupon {
            code: "BIG".to_string(),
            discount_type: DiscountType::Fixed,
            value: Decimal::from(5),
            min_order_amount: Some(Decimal::from(100)),
            max_discount: None,
            active: true,
            usage_limit: None,
            used_count: 0,
            starts_at: None,
            expires_at: None,
        };

        let priced = price_order(vec![line(10, 2)], Some(&coupon), Timestamp::now())?;

        assert_eq!(priced.totals.discount, Decimal::ZERO);
        assert_eq!(priced.totals.total, Decimal::from(20));
        assert_eq!(priced.applied_coupon, None);

        Ok(())
    }
}
