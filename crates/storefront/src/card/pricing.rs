//! Displayed price, compare-at price, and discount percentage.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::types::{Product, ProductVariant};

/// The price to display: the resolved variant's, or the product's base price.
#[must_use]
pub fn current_price(product: &Product, variant: Option<&ProductVariant>) -> Decimal {
    variant.map_or(product.price, |v| v.price)
}

/// The strikethrough price, if any.
///
/// A resolved variant without its own compare-at price inherits the
/// product's; without a resolved variant the product's applies directly.
#[must_use]
pub fn compare_at_price(product: &Product, variant: Option<&ProductVariant>) -> Option<Decimal> {
    variant
        .and_then(|v| v.compare_at_price)
        .or(product.compare_at_price)
}

/// Whole-percent reduction of `current` below `compare_at`, rounded half up.
///
/// Absent (never zero) when there is no compare-at price, when it does not
/// exceed the current price, or when it is not positive. Absence means no
/// discount badge.
#[must_use]
pub fn discount_percentage(current: Decimal, compare_at: Option<Decimal>) -> Option<u32> {
    let compare = compare_at?;
    if compare <= Decimal::ZERO || compare <= current {
        return None;
    }

    let percent = (compare - current) / compare * Decimal::ONE_HUNDRED;
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .filter(|&percent| percent > 0)
}
