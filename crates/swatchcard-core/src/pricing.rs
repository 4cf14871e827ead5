//! Sale detection from storefront price ranges.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::products::PriceRange;

/// Parses a storefront decimal string such as `"40.00"`.
///
/// Returns `None` for empty or non-numeric input.
#[must_use]
pub fn parse_amount(amount: &str) -> Option<Decimal> {
    Decimal::from_str(amount.trim()).ok()
}

/// A product is on sale when its compare-at minimum price is strictly
/// greater than its current minimum price.
///
/// An absent or non-numeric compare-at price, or a non-numeric current
/// price, means not on sale.
#[must_use]
pub fn is_on_sale(price: &PriceRange, original: Option<&PriceRange>) -> bool {
    let Some(original) = original else {
        return false;
    };
    match (
        parse_amount(&original.min_variant_price.amount),
        parse_amount(&price.min_variant_price.amount),
    ) {
        (Some(original), Some(current)) => original > current,
        _ => false,
    }
}
