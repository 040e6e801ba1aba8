//! Integration tests for product-card selection, resolution, and value
//! availability.

use vitrina_integration_tests::fixtures;
use vitrina_storefront::Product;
use vitrina_storefront::card::ValueAvailability;

// =============================================================================
// Resolution Tests
// =============================================================================

#[test]
fn test_empty_selection_stays_unresolved_with_many_variants() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    assert!(card.matching_variant().is_none());
}

#[test]
fn test_partial_selection_narrows_without_resolving() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    // Red still has two sizes, so the card must not commit to one.
    card.select("Color", "Red");
    assert!(card.matching_variant().is_none());
}

#[test]
fn test_full_selection_resolves_to_the_agreeing_variant() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Color", "Red");
    card.select("Size", "38");

    let variant = card.matching_variant().expect("selection should resolve");
    assert_eq!(variant.id.as_str(), "var-red-38");
}

#[test]
fn test_one_choice_resolves_when_it_is_unambiguous() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    // Only one Blue variant exists, so Color alone settles it.
    card.select("Color", "Blue");

    let variant = card.matching_variant().expect("Blue should resolve");
    assert_eq!(variant.id.as_str(), "var-blue-38");
}

#[test]
fn test_single_variant_product_resolves_with_nothing_selected() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "wool-cap"));

    let variant = card.matching_variant().expect("sole variant should resolve");
    assert_eq!(variant.id.as_str(), "var-cap");
}

#[test]
fn test_selecting_an_absent_combination_unresolves() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Color", "Blue");
    assert!(card.matching_variant().is_some());

    // No Blue/39 variant exists; the card falls back to unresolved.
    card.select("Size", "39");
    assert!(card.matching_variant().is_none());
}

#[test]
fn test_variantless_products_never_resolve() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "canvas-tote"));

    assert!(!card.has_variants());
    assert!(card.matching_variant().is_none());
}

#[test]
fn test_variants_without_options_degrade_to_variantless() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": "odd", "slug": "odd", "title": "Odd", "price": "10", "stock": 4,
        "variants": [
            { "id": "orphan", "options": { "Size": "M" }, "price": "99", "stock": 1 }
        ]
    }))
    .expect("product should parse");
    let mut card = fixtures::card(&product);

    assert!(!card.has_variants());
    card.select("Size", "M");
    assert!(card.matching_variant().is_none());
    assert!(card.selection().is_empty(), "no axes are declared to select");
}

// =============================================================================
// Availability Tests
// =============================================================================

#[test]
fn test_availability_with_nothing_selected() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    assert_eq!(
        card.value_availability("Color", "Red"),
        ValueAvailability::Available
    );
    assert_eq!(
        card.value_availability("Size", "38"),
        ValueAvailability::Available
    );
    // Size 39 exists only as the sold-out Red/39.
    assert_eq!(
        card.value_availability("Size", "39"),
        ValueAvailability::SoldOut
    );
}

#[test]
fn test_availability_respects_the_other_axis() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Color", "Blue");
    assert_eq!(
        card.value_availability("Size", "38"),
        ValueAvailability::Available
    );
    assert_eq!(
        card.value_availability("Size", "39"),
        ValueAvailability::Unavailable,
        "Blue/39 does not exist as a combination"
    );
}

#[test]
fn test_availability_probe_overwrites_its_own_axis() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    // Probing Blue while Red is selected asks about Blue, not Red-and-Blue.
    card.select("Color", "Red");
    assert_eq!(
        card.value_availability("Color", "Blue"),
        ValueAvailability::Available
    );
}

#[test]
fn test_sold_out_combination_is_distinguished_from_absent() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Size", "39");
    assert_eq!(
        card.value_availability("Color", "Red"),
        ValueAvailability::SoldOut
    );
    assert_eq!(
        card.value_availability("Color", "Blue"),
        ValueAvailability::Unavailable
    );
}

#[test]
fn test_undeclared_value_probes_as_unavailable() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    assert_eq!(
        card.value_availability("Size", "40"),
        ValueAvailability::Unavailable
    );
}

#[test]
fn test_is_value_available_collapses_to_purchasable_only() {
    let catalog = fixtures::catalog();
    let card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    assert!(card.is_value_available("Color", "Red"));
    assert!(!card.is_value_available("Size", "39"), "sold out is not available");
    assert!(!card.is_value_available("Size", "40"), "absent is not available");
}

// =============================================================================
// Selection Semantics Tests
// =============================================================================

#[test]
fn test_reselecting_the_same_value_changes_nothing() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Color", "Blue");
    let before = card.derive();

    card.select("Color", "Blue");
    assert_eq!(card.derive(), before, "reselect is idempotent, not a toggle");
}

#[test]
fn test_selecting_overwrites_the_previous_value() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));

    card.select("Color", "Blue");
    card.select("Color", "Red");

    assert_eq!(card.selection().get("Color"), Some("Red"));
    assert_eq!(card.selection().len(), 1);
}

#[test]
fn test_undeclared_writes_leave_state_untouched() {
    let catalog = fixtures::catalog();
    let mut card = fixtures::card(fixtures::product(&catalog, "trail-runner"));
    card.select("Color", "Red");
    let before = card.derive();

    card.select("Material", "Suede");
    card.select("Color", "Green");

    assert_eq!(card.derive(), before);
    assert_eq!(card.selection().len(), 1);
}

#[test]
fn test_two_cards_over_one_product_are_isolated() {
    let catalog = fixtures::catalog();
    let product = fixtures::product(&catalog, "trail-runner");
    let mut first = fixtures::card(product);
    let second = fixtures::card(product);

    first.select("Color", "Blue");

    assert!(first.matching_variant().is_some());
    assert!(second.selection().is_empty());
    assert!(second.matching_variant().is_none());
}
