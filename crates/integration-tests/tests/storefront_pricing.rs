//! Integration tests for price, compare-at, and discount derivation.

use rust_decimal::Decimal;
use vitrina_integration_tests::fixtures;
use vitrina_storefront::Product;

// =============================================================================
// Current Price Tests
// =============================================================================

#[test]
fn test_unresolved_card_shows_product_pricing() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    assert_eq!(card.current_price(), Decimal::from(90));
    assert_eq!(card.compare_at_price(), Some(Decimal::from(120)));
    assert_eq!(card.discount_percentage(), Some(25));
}

#[test]
fn test_resolved_card_shows_variant_pricing() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Color", "Red");
    card.select("Size", "38");

    assert_eq!(card.current_price(), Decimal::from(100));
    assert_eq!(card.compare_at_price(), Some(Decimal::from(125)));
    assert_eq!(card.discount_percentage(), Some(20));
}

#[test]
fn test_losing_resolution_restores_product_pricing() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Color", "Blue");
    assert_eq!(card.current_price(), Decimal::from(110));

    // Blue/39 does not exist, so pricing falls back to the product.
    card.select("Size", "39");
    assert_eq!(card.current_price(), Decimal::from(90));
}

// =============================================================================
// Compare-At Fallback Tests
// =============================================================================

#[test]
fn test_variant_without_compare_at_inherits_the_products() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Color", "Blue");

    assert_eq!(card.compare_at_price(), Some(Decimal::from(120)));
    // (120 - 110) / 120 = 8.33%, rounded half-up.
    assert_eq!(card.discount_percentage(), Some(8));
}

#[test]
fn test_no_compare_at_anywhere_means_none() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "wool-cap"));

    assert!(card.matching_variant().is_some());
    assert_eq!(card.current_price(), Decimal::from(28));
    assert!(card.compare_at_price().is_none());
    assert!(card.discount_percentage().is_none());
}

// =============================================================================
// Discount Rounding Tests
// =============================================================================

#[test]
fn test_discount_rounds_half_up() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": "p", "slug": "p", "title": "P",
        "price": "70", "compare_at_price": "80"
    }))
    .expect("product should parse");
    let card = fixtures::card(&product);

    // (80 - 70) / 80 = 12.5%, which rounds up.
    assert_eq!(card.discount_percentage(), Some(13));
}

#[test]
fn test_discount_rounds_two_thirds_up() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Color", "Red");
    card.select("Size", "39");

    // (120 - 100) / 120 = 16.67%.
    assert_eq!(card.discount_percentage(), Some(17));
}

#[test]
fn test_no_discount_when_compare_at_does_not_exceed_price() {
    let equal: Product = serde_json::from_value(serde_json::json!({
        "id": "a", "slug": "a", "title": "A",
        "price": "50", "compare_at_price": "50"
    }))
    .expect("product should parse");
    assert!(fixtures::card(&equal).discount_percentage().is_none());

    let lower: Product = serde_json::from_value(serde_json::json!({
        "id": "b", "slug": "b", "title": "B",
        "price": "50", "compare_at_price": "40"
    }))
    .expect("product should parse");
    assert!(fixtures::card(&lower).discount_percentage().is_none());
}

#[test]
fn test_negligible_discount_never_shows_zero_percent() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": "p", "slug": "p", "title": "P",
        "price": "999.99", "compare_at_price": "1000"
    }))
    .expect("product should parse");
    let card = fixtures::card(&product);

    assert_eq!(card.compare_at_price(), Some(Decimal::from(1000)));
    assert!(
        card.discount_percentage().is_none(),
        "a badge reading -0% must never appear"
    );
}

// =============================================================================
// Degraded Data Tests
// =============================================================================

#[test]
fn test_variant_missing_price_defaults_to_zero() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": "p", "slug": "p", "title": "P",
        "price": "40", "compare_at_price": "120",
        "options": [{ "name": "Size", "values": ["M"] }],
        "variants": [
            { "id": "free", "options": { "Size": "M" }, "stock": 2 }
        ]
    }))
    .expect("product should parse");
    let card = fixtures::card(&product);

    assert_eq!(card.current_price(), Decimal::ZERO);
    // Against the inherited compare-at the whole price is discounted.
    assert_eq!(card.discount_percentage(), Some(100));
    assert!(card.can_add_to_cart());
}

// =============================================================================
// Money Formatting Tests
// =============================================================================

#[test]
fn test_format_money_pads_to_two_decimals() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    assert_eq!(card.format_money(card.current_price()), "$90.00");
    assert_eq!(card.format_money(Decimal::new(1999, 2)), "$19.99");
    assert_eq!(card.format_money(Decimal::new(10555, 3)), "$10.56");
}

#[test]
fn test_price_carries_the_cards_currency() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    let price = card.price();
    assert_eq!(price.amount(), Decimal::from(90));
    assert_eq!(price.display(), "$90.00");
}
