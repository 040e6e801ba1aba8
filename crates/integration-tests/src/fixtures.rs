//! Catalog fixtures shared by the integration tests.
//!
//! One catalog, four products:
//!
//! - `trail-runner` - two axes (Color, Size) with a sold-out size, an
//!   undeclared combination (no Blue/39), and per-variant pricing
//! - `canvas-tote` - no variants, in stock
//! - `city-poster` - no variants, sold out
//! - `wool-cap` - a single variant, so it resolves with nothing selected

use vitrina_core::CurrencyCode;
use vitrina_storefront::{Catalog, Product, ProductCard};

/// Parse the shared fixture catalog.
///
/// # Panics
///
/// Panics if the fixture JSON is invalid, which is a bug in the fixture.
#[must_use]
pub fn catalog() -> Catalog {
    serde_json::from_value(serde_json::json!({
        "products": [
            {
                "id": "prod-1", "slug": "trail-runner", "title": "Trail Runner",
                "description": "<p>Light <b>trail</b> shoe</p>",
                "price": "90", "compare_at_price": "120",
                "featured": true,
                "images": ["runner-default.jpg"],
                "options": [
                    { "name": "Color", "values": ["Red", "Blue"],
                      "swatches": { "Red": "#dc2626", "Blue": "#2563eb" } },
                    { "name": "Size", "values": ["38", "39"] }
                ],
                "variants": [
                    { "id": "var-red-38", "options": { "Color": "Red", "Size": "38" },
                      "price": "100", "compare_at_price": "125", "stock": 5,
                      "image": "runner-red.jpg" },
                    { "id": "var-red-39", "options": { "Color": "Red", "Size": "39" },
                      "price": "100", "stock": 0 },
                    { "id": "var-blue-38", "options": { "Color": "Blue", "Size": "38" },
                      "price": "110", "stock": 1 }
                ]
            },
            {
                "id": "prod-2", "slug": "canvas-tote", "title": "Canvas Tote",
                "price": "35", "stock": 12
            },
            {
                "id": "prod-3", "slug": "city-poster", "title": "City Poster",
                "price": "18", "stock": 0
            },
            {
                "id": "prod-4", "slug": "wool-cap", "title": "Wool Cap",
                "price": "25",
                "options": [{ "name": "Size", "values": ["One Size"] }],
                "variants": [
                    { "id": "var-cap", "options": { "Size": "One Size" },
                      "price": "28", "stock": 3 }
                ]
            }
        ],
        "collections": [
            { "id": "col-summer", "name": "Summer", "featured": true,
              "product_ids": ["prod-1", "prod-2"] },
            { "id": "col-prints", "name": "Prints",
              "product_ids": ["prod-3"] }
        ]
    }))
    .expect("fixture catalog should be valid")
}

/// Look up a fixture product by slug.
///
/// # Panics
///
/// Panics when the slug is not in the fixture catalog.
#[must_use]
pub fn product<'a>(catalog: &'a Catalog, slug: &str) -> &'a Product {
    catalog
        .product_by_slug(slug)
        .expect("fixture product should exist")
}

/// A USD card over a fixture product with nothing selected.
#[must_use]
pub fn card(product: &Product) -> ProductCard<'_> {
    ProductCard::new(product, CurrencyCode::USD)
}
