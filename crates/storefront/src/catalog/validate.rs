//! Catalog data-integrity diagnostics.
//!
//! The engine never rejects upstream data: malformed products degrade
//! gracefully at render time. This module is the place that names the
//! faults, so operators can find and fix them at the source. The `check`
//! CLI command runs these and logs each finding.

use thiserror::Error;
use vitrina_core::{CollectionId, ProductId, VariantId};

use crate::catalog::options::OptionCatalog;
use crate::catalog::types::{Catalog, Product};

/// A single data-integrity finding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Two variants share the same option combination. Resolution treats the
    /// combination as ambiguous and resolves no variant.
    #[error("product {product}: variants {first} and {second} share the same option combination")]
    DuplicateVariantCombination {
        product: ProductId,
        first: VariantId,
        second: VariantId,
    },

    /// A variant sets an option the product does not declare.
    #[error("product {product}: variant {variant} sets undeclared option \"{option}\"")]
    UnknownOption {
        product: ProductId,
        variant: VariantId,
        option: String,
    },

    /// A variant uses a value outside the option's declared values.
    #[error(
        "product {product}: variant {variant} uses value \"{value}\" not declared on option \"{option}\""
    )]
    UndeclaredValue {
        product: ProductId,
        variant: VariantId,
        option: String,
        value: String,
    },

    /// A variant omits one of the product's declared options.
    #[error("product {product}: variant {variant} is missing option \"{option}\"")]
    MissingOption {
        product: ProductId,
        variant: VariantId,
        option: String,
    },

    /// The product has variants but no option definitions.
    #[error("product {product}: has variants but no options; treated as variant-less")]
    VariantsWithoutOptions { product: ProductId },

    /// The product declares options but has no variants.
    #[error("product {product}: declares options but has no variants; treated as variant-less")]
    OptionsWithoutVariants { product: ProductId },

    /// An option name appears more than once on the product.
    #[error("product {product}: option \"{name}\" declared more than once; first declaration wins")]
    DuplicateOptionName { product: ProductId, name: String },

    /// A value appears more than once on one option.
    #[error(
        "product {product}: option \"{option}\" declares value \"{value}\" more than once; first occurrence wins"
    )]
    DuplicateOptionValue {
        product: ProductId,
        option: String,
        value: String,
    },

    /// A variant row arrived without a price and deserialized as zero.
    #[error("product {product}: variant {variant} has price zero")]
    ZeroPriceVariant {
        product: ProductId,
        variant: VariantId,
    },

    /// Two products share an ID.
    #[error("catalog: product ID {product} appears more than once")]
    DuplicateProductId { product: ProductId },

    /// Two products share a slug.
    #[error("catalog: slug \"{slug}\" appears on more than one product")]
    DuplicateProductSlug { slug: String },

    /// A collection references a product the catalog does not contain.
    #[error("collection {collection}: references unknown product {product}")]
    UnknownCollectionMember {
        collection: CollectionId,
        product: ProductId,
    },
}

/// Check one product's options and variants for data faults.
#[must_use]
pub fn validate_product(product: &Product) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    check_option_declarations(product, &mut issues);
    check_variant_presence(product, &mut issues);

    let options = OptionCatalog::build(product);
    check_variant_options(product, &options, &mut issues);
    check_duplicate_combinations(product, &mut issues);

    for variant in &product.variants {
        if variant.price.is_zero() {
            issues.push(CatalogIssue::ZeroPriceVariant {
                product: product.id.clone(),
                variant: variant.id.clone(),
            });
        }
    }

    issues
}

/// Check every product plus catalog-level uniqueness and references.
#[must_use]
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for product in &catalog.products {
        issues.extend(validate_product(product));
    }

    for (index, product) in catalog.products.iter().enumerate() {
        let earlier = catalog.products.iter().take(index);
        for other in earlier {
            if other.id == product.id {
                issues.push(CatalogIssue::DuplicateProductId {
                    product: product.id.clone(),
                });
            }
            if other.slug == product.slug {
                issues.push(CatalogIssue::DuplicateProductSlug {
                    slug: product.slug.clone(),
                });
            }
        }
    }

    for collection in &catalog.collections {
        for member in &collection.product_ids {
            if catalog.product(member).is_none() {
                issues.push(CatalogIssue::UnknownCollectionMember {
                    collection: collection.id.clone(),
                    product: member.clone(),
                });
            }
        }
    }

    issues
}

fn check_option_declarations(product: &Product, issues: &mut Vec<CatalogIssue>) {
    for (index, option) in product.options.iter().enumerate() {
        if product
            .options
            .iter()
            .take(index)
            .any(|earlier| earlier.name == option.name)
        {
            issues.push(CatalogIssue::DuplicateOptionName {
                product: product.id.clone(),
                name: option.name.clone(),
            });
        }

        for (value_index, value) in option.values.iter().enumerate() {
            if option.values.iter().take(value_index).any(|v| v == value) {
                issues.push(CatalogIssue::DuplicateOptionValue {
                    product: product.id.clone(),
                    option: option.name.clone(),
                    value: value.clone(),
                });
            }
        }
    }
}

fn check_variant_presence(product: &Product, issues: &mut Vec<CatalogIssue>) {
    if !product.variants.is_empty() && product.options.is_empty() {
        issues.push(CatalogIssue::VariantsWithoutOptions {
            product: product.id.clone(),
        });
    }
    if product.variants.is_empty() && !product.options.is_empty() {
        issues.push(CatalogIssue::OptionsWithoutVariants {
            product: product.id.clone(),
        });
    }
}

fn check_variant_options(
    product: &Product,
    options: &OptionCatalog,
    issues: &mut Vec<CatalogIssue>,
) {
    for variant in &product.variants {
        for (option, value) in &variant.options {
            match options.axis(option) {
                None => issues.push(CatalogIssue::UnknownOption {
                    product: product.id.clone(),
                    variant: variant.id.clone(),
                    option: option.clone(),
                }),
                Some(axis) if !axis.declares(value) => {
                    issues.push(CatalogIssue::UndeclaredValue {
                        product: product.id.clone(),
                        variant: variant.id.clone(),
                        option: option.clone(),
                        value: value.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        for axis in options.axes() {
            if !variant.options.contains_key(&axis.name) {
                issues.push(CatalogIssue::MissingOption {
                    product: product.id.clone(),
                    variant: variant.id.clone(),
                    option: axis.name.clone(),
                });
            }
        }
    }
}

fn check_duplicate_combinations(product: &Product, issues: &mut Vec<CatalogIssue>) {
    for (index, variant) in product.variants.iter().enumerate() {
        for earlier in product.variants.iter().take(index) {
            if earlier.options == variant.options {
                issues.push(CatalogIssue::DuplicateVariantCombination {
                    product: product.id.clone(),
                    first: earlier.id.clone(),
                    second: variant.id.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_clean_product_has_no_issues() {
        let product = product(serde_json::json!({
            "id": "p", "slug": "p", "title": "P", "price": "10",
            "options": [{ "name": "Size", "values": ["38", "39"] }],
            "variants": [
                { "id": "v1", "options": { "Size": "38" }, "price": "10", "stock": 1 },
                { "id": "v2", "options": { "Size": "39" }, "price": "10", "stock": 1 }
            ]
        }));
        assert!(validate_product(&product).is_empty());
    }

    #[test]
    fn test_duplicate_combination_is_reported() {
        let product = product(serde_json::json!({
            "id": "p", "slug": "p", "title": "P",
            "options": [{ "name": "Size", "values": ["38"] }],
            "variants": [
                { "id": "v1", "options": { "Size": "38" }, "price": "10", "stock": 1 },
                { "id": "v2", "options": { "Size": "38" }, "price": "12", "stock": 1 }
            ]
        }));
        let issues = validate_product(&product);
        assert!(issues.iter().any(|issue| matches!(
            issue,
            CatalogIssue::DuplicateVariantCombination { .. }
        )));
    }

    #[test]
    fn test_unknown_option_and_undeclared_value() {
        let product = product(serde_json::json!({
            "id": "p", "slug": "p", "title": "P",
            "options": [{ "name": "Size", "values": ["38"] }],
            "variants": [
                {
                    "id": "v1",
                    "options": { "Size": "44", "Material": "Suede" },
                    "price": "10",
                    "stock": 1
                }
            ]
        }));
        let issues = validate_product(&product);
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::UnknownOption { option, .. } if option == "Material")));
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::UndeclaredValue { value, .. } if value == "44")));
    }

    #[test]
    fn test_missing_option_entry() {
        let product = product(serde_json::json!({
            "id": "p", "slug": "p", "title": "P",
            "options": [
                { "name": "Size", "values": ["38"] },
                { "name": "Color", "values": ["Red"] }
            ],
            "variants": [
                { "id": "v1", "options": { "Size": "38" }, "price": "10", "stock": 1 }
            ]
        }));
        let issues = validate_product(&product);
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::MissingOption { option, .. } if option == "Color")));
    }

    #[test]
    fn test_presence_mismatches() {
        let no_options = product(serde_json::json!({
            "id": "p1", "slug": "p1", "title": "P1",
            "variants": [{ "id": "v1", "price": "10", "stock": 1 }]
        }));
        assert!(validate_product(&no_options)
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::VariantsWithoutOptions { .. })));

        let no_variants = product(serde_json::json!({
            "id": "p2", "slug": "p2", "title": "P2",
            "options": [{ "name": "Size", "values": ["38"] }]
        }));
        assert!(validate_product(&no_variants)
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::OptionsWithoutVariants { .. })));
    }

    #[test]
    fn test_zero_price_variant_is_flagged() {
        let product = product(serde_json::json!({
            "id": "p", "slug": "p", "title": "P",
            "options": [{ "name": "Size", "values": ["38"] }],
            "variants": [{ "id": "v1", "options": { "Size": "38" }, "stock": 1 }]
        }));
        assert!(validate_product(&product)
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::ZeroPriceVariant { .. })));
    }

    #[test]
    fn test_catalog_level_duplicates_and_references() {
        let catalog: Catalog = serde_json::from_value(serde_json::json!({
            "products": [
                { "id": "p1", "slug": "a", "title": "A" },
                { "id": "p1", "slug": "a", "title": "A again" }
            ],
            "collections": [
                { "id": "c1", "name": "Summer", "product_ids": ["p1", "ghost"] }
            ]
        }))
        .unwrap();

        let issues = validate_catalog(&catalog);
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::DuplicateProductId { .. })));
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::DuplicateProductSlug { .. })));
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::UnknownCollectionMember { product, .. } if product.as_str() == "ghost")));
    }

    #[test]
    fn test_issue_display_names_the_fault() {
        let issue = CatalogIssue::DuplicateVariantCombination {
            product: ProductId::new("p"),
            first: VariantId::new("v1"),
            second: VariantId::new("v2"),
        };
        assert_eq!(
            issue.to_string(),
            "product p: variants v1 and v2 share the same option combination"
        );
    }
}
