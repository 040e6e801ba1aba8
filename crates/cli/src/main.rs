//! Vitrina CLI - catalog inspection and storefront simulation tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate a catalog file
//! vitrina check -c catalog.json
//!
//! # Render a product card, picking options
//! vitrina card runner -c catalog.json -s Color=Red -s Size=38
//!
//! # Simulate adding the resolved variant to a cart
//! vitrina card runner -c catalog.json -s Color=Blue --add
//!
//! # List the products a collection shows
//! vitrina browse -c catalog.json --collection summer
//! ```
//!
//! # Commands
//!
//! - `check` - Validate a catalog file and report issues
//! - `card` - Render a product card under a selection
//! - `browse` - List the cards a storefront view shows

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vitrina")]
#[command(author, version, about = "Vitrina storefront tools")]
struct Cli {
    /// Path to the catalog JSON file (fallback: `VITRINA_CATALOG`)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog file and report issues
    Check,
    /// Render a product card under a selection
    Card {
        /// Product slug
        slug: String,

        /// Option choice, e.g. `Color=Red` (repeatable)
        #[arg(short, long = "select", value_name = "OPTION=VALUE")]
        select: Vec<String>,

        /// Simulate pressing the add-to-cart button afterwards
        #[arg(long)]
        add: bool,

        /// Print the card view as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the cards a storefront view shows
    Browse {
        /// Show only this collection's products
        #[arg(long, value_name = "ID")]
        collection: Option<String>,

        /// Show only featured products
        #[arg(long)]
        featured: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check => commands::check::run(cli.catalog.as_deref())?,
        Commands::Card {
            slug,
            select,
            add,
            json,
        } => {
            commands::card::run(cli.catalog.as_deref(), &slug, &select, add, json)?;
        }
        Commands::Browse {
            collection,
            featured,
        } => {
            commands::browse::run(cli.catalog.as_deref(), collection.as_deref(), featured)?;
        }
    }
    Ok(())
}
