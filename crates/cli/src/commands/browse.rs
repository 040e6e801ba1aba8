//! Storefront browse command.
//!
//! # Usage
//!
//! ```bash
//! # Every product
//! vitrina browse -c catalog.json
//!
//! # One collection's products
//! vitrina browse -c catalog.json --collection summer
//!
//! # The featured rail
//! vitrina browse -c catalog.json --featured
//! ```

use std::path::Path;

use vitrina_core::CollectionId;
use vitrina_storefront::view::{CardPresenter, ProductCardView};
use vitrina_storefront::{CollectionBrowse, Product, StorefrontError};

use super::CliError;

/// List the cards a storefront view shows.
pub fn run(
    catalog_flag: Option<&Path>,
    collection: Option<&str>,
    featured_only: bool,
) -> Result<(), CliError> {
    let (config, catalog) = super::load(catalog_flag)?;

    let mut browse = CollectionBrowse::new(&catalog.collections);
    if let Some(raw) = collection {
        let id = CollectionId::new(raw);
        if catalog.collection(&id).is_none() {
            return Err(StorefrontError::UnknownCollection(raw.to_owned()).into());
        }
        browse.view_collection(&id);
    }

    let visible: Vec<&Product> = browse
        .visible_products(&catalog.products)
        .into_iter()
        .filter(|product| !featured_only || product.featured)
        .collect();

    let presenter = CardPresenter::with_cache_size(config.currency, config.card_cache_size);

    #[allow(clippy::print_stdout)]
    {
        match browse.selected() {
            Some(active) => println!("{} ({} product(s))", active.name, visible.len()),
            None => println!("All products ({} product(s))", visible.len()),
        }
        for product in visible {
            let view = presenter.present_product(product);
            println!("  {}", card_line(&view));
        }
    }

    Ok(())
}

/// One-line summary of a card view.
fn card_line(view: &ProductCardView) -> String {
    let mut parts = vec![view.title.clone(), view.price.clone()];
    if let Some(compare) = view.compare_at_price.as_deref() {
        parts.push(format!("(was {compare})"));
    }
    if let Some(badge) = view.discount_badge.as_deref() {
        parts.push(badge.to_owned());
    }
    if view.featured {
        parts.push("Featured".to_owned());
    }
    if !view.in_stock {
        parts.push("Sold out".to_owned());
    }
    parts.join("  ")
}
