//! Product card command.
//!
//! # Usage
//!
//! ```bash
//! # Render a card with nothing selected
//! vitrina card runner -c catalog.json
//!
//! # Pick options (undeclared pairs are ignored, like a storefront click)
//! vitrina card runner -c catalog.json -s Color=Red -s Size=38
//!
//! # Simulate the add-to-cart button
//! vitrina card runner -c catalog.json -s Color=Blue --add
//!
//! # Machine-readable card view
//! vitrina card runner -c catalog.json --json
//! ```

use std::path::Path;

use vitrina_core::{CurrencyCode, Price};
use vitrina_storefront::view::{CardPresenter, ProductCardView};
use vitrina_storefront::{MemoryCart, ProductCard, StorefrontError};

use super::CliError;

/// Render one product card under a selection.
pub fn run(
    catalog_flag: Option<&Path>,
    slug: &str,
    selections: &[String],
    add: bool,
    json: bool,
) -> Result<(), CliError> {
    let (config, catalog) = super::load(catalog_flag)?;

    let product = catalog
        .product_by_slug(slug)
        .ok_or_else(|| StorefrontError::UnknownProduct(slug.to_owned()))?;

    let mut card = ProductCard::new(product, config.currency);
    for pair in selections {
        let (option, value) = parse_selection(pair)?;
        card.select(option, value);
    }

    let presenter = CardPresenter::with_cache_size(config.currency, config.card_cache_size);
    let view = presenter.present(&card);

    if json {
        #[allow(clippy::print_stdout)]
        {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    } else {
        print_card(&view);
    }

    if add {
        let mut cart = MemoryCart::new();
        if card.add_to_cart(&mut cart) {
            print_cart(&cart, config.currency);
        } else {
            tracing::warn!("Nothing added: the card is not purchasable right now");
        }
    }

    Ok(())
}

/// Split an `OPTION=VALUE` argument.
fn parse_selection(pair: &str) -> Result<(&str, &str), CliError> {
    pair.split_once('=')
        .map(|(option, value)| (option.trim(), value.trim()))
        .ok_or_else(|| CliError::InvalidSelection(pair.to_owned()))
}

/// Print a card view as indented text.
fn print_card(view: &ProductCardView) {
    #[allow(clippy::print_stdout)]
    {
        let mut badges: Vec<String> = Vec::new();
        if let Some(discount) = view.discount_badge.as_deref() {
            badges.push(discount.to_owned());
        }
        if view.featured {
            badges.push("Featured".to_owned());
        }
        if !view.in_stock {
            badges.push("Sold out".to_owned());
        }

        if badges.is_empty() {
            println!("{}", view.title);
        } else {
            println!("{} [{}]", view.title, badges.join(", "));
        }

        if !view.description.is_empty() {
            println!("  {}", view.description);
        }
        match view.compare_at_price.as_deref() {
            Some(compare) => println!("  Price: {} (was {compare})", view.price),
            None => println!("  Price: {}", view.price),
        }
        if let Some(image) = view.image.as_deref() {
            println!("  Image: {image}");
        }
        for row in &view.option_rows {
            let choices: Vec<String> = row
                .available_choices()
                .map(|choice| {
                    if choice.selected {
                        format!("[{}]", choice.value)
                    } else {
                        choice.value.clone()
                    }
                })
                .collect();
            println!("  {}: {}", row.name, choices.join(" "));
        }
        let button = if view.can_add_to_cart {
            "enabled"
        } else {
            "disabled"
        };
        println!("  Button: {} ({button})", view.add_button_label);
    }
}

/// Print the simulated cart contents.
fn print_cart(cart: &MemoryCart, currency: CurrencyCode) {
    #[allow(clippy::print_stdout)]
    {
        println!();
        println!("Cart:");
        for line in cart.lines() {
            let price = Price::new(line.unit_price, currency).display();
            match line.variant_label.as_deref() {
                Some(label) => println!("  {} ({label}) x{} @ {price}", line.title, line.quantity),
                None => println!("  {} x{} @ {price}", line.title, line.quantity),
            }
        }
        let subtotal = Price::new(cart.subtotal(), currency).display();
        println!("  Subtotal: {subtotal}");
    }
}
