//! Shopfront CLI - browse the catalog and manage the cart and wishlist.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! shop products --category electronics --sort price-low
//! shop products --search kurta
//!
//! # Cart (requires `shop login` first)
//! shop cart add 3
//! shop cart qty 3 -1
//! shop cart checkout
//!
//! # Wishlist
//! shop wishlist toggle 5
//! shop wishlist move 5
//! ```
//!
//! # Commands
//!
//! - `products` - List products with filter, search and sort
//! - `view` - Show one product's detail page
//! - `cart` - Show or change the cart, or check out
//! - `buy-now` - Check out a single product
//! - `wishlist` - Show or change the wishlist
//! - `carousel` - Show the category carousel
//! - `login` / `logout` - Set the login flag
//!
//! Durable data lives in `SHOPFRONT_DATA_DIR` (see
//! [`shopfront_storefront::config`]). Page hand-off data only lasts for one
//! invocation.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shopfront_core::{CategoryFilter, ProductId, SortKey};
use shopfront_storefront::config::{LogFormat, ShopConfig};
use shopfront_storefront::state::ShopState;
use shopfront_storefront::telemetry;

mod commands;

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about = "Shopfront command-line shop")]
struct Cli {
    /// Directory for durable storage (overrides `SHOPFRONT_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Category to show (`all` for every category)
        #[arg(short, long, default_value = CategoryFilter::ALL)]
        category: CategoryFilter,

        /// Search term matched against name, description, category and badge
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort order (`default`, `price-low`, `price-high`, `name-asc`, `name-desc`)
        #[arg(long, default_value = "default")]
        sort: SortKey,
    },
    /// Show a product's detail page
    View {
        /// Product ID
        id: ProductId,
    },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Check out a single product without touching the cart
    BuyNow {
        /// Product ID
        id: ProductId,
    },
    /// Show or change the wishlist
    Wishlist {
        #[command(subcommand)]
        action: Option<WishlistAction>,
    },
    /// Show the category carousel
    Carousel {
        #[command(subcommand)]
        action: Option<CarouselAction>,
    },
    /// Mark the shopper as logged in
    Login,
    /// Mark the shopper as logged out
    Logout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add one of a product
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Change a line's quantity by a delta
    Qty {
        /// Product ID
        id: ProductId,

        /// Quantity change, e.g. 1 or -1
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
    /// Remove a line
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Hand the cart to checkout
    Checkout,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist
    Show,
    /// Save a product, or unsave it if already saved
    Toggle {
        /// Product ID
        id: ProductId,
    },
    /// Remove a saved product
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Move a saved product into the cart
    Move {
        /// Product ID
        id: ProductId,
    },
}

#[derive(Subcommand)]
enum CarouselAction {
    /// Advance one slide
    Next,
    /// Go back one slide
    Prev,
    /// Jump to a slide
    Go {
        /// Slide index, starting at 0
        index: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match ShopConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    telemetry::init_tracing(config.log_format);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, mut config: ShopConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let mut shop = ShopState::open(&config)?;

    match cli.command {
        Commands::Products {
            category,
            search,
            sort,
        } => commands::catalog::list(&mut shop, category, &search, sort),
        Commands::View { id } => commands::catalog::view(&mut shop, id)?,
        Commands::Cart { action } => match action.unwrap_or(CartAction::Show) {
            CartAction::Show => commands::cart::show(&shop),
            CartAction::Add { id } => commands::cart::add(&mut shop, id)?,
            CartAction::Qty { id, delta } => commands::cart::quantity(&mut shop, id, delta)?,
            CartAction::Remove { id } => commands::cart::remove(&mut shop, id)?,
            CartAction::Checkout => commands::cart::checkout(&mut shop)?,
        },
        Commands::BuyNow { id } => commands::cart::buy_now(&mut shop, id)?,
        Commands::Wishlist { action } => match action.unwrap_or(WishlistAction::Show) {
            WishlistAction::Show => commands::wishlist::show(&shop),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut shop, id)?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&mut shop, id)?,
            WishlistAction::Move { id } => commands::wishlist::move_to_cart(&mut shop, id)?,
        },
        Commands::Carousel { action } => {
            let carousel = shop.carousel_mut();
            match action {
                Some(CarouselAction::Next) => carousel.next(),
                Some(CarouselAction::Prev) => carousel.previous(),
                Some(CarouselAction::Go { index }) => carousel.go_to(index),
                None => {}
            }
            commands::carousel::show(shop.carousel());
        }
        Commands::Login => commands::session::login(&mut shop)?,
        Commands::Logout => commands::session::logout(&shop)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_delta() {
        let cli = Cli::try_parse_from(["shop", "cart", "qty", "3", "-1"]);
        assert!(matches!(
            cli.map(|cli| cli.command),
            Ok(Commands::Cart {
                action: Some(CartAction::Qty { delta: -1, .. })
            })
        ));
    }

    #[test]
    fn test_parse_products_defaults() {
        let cli = Cli::try_parse_from(["shop", "products", "--sort", "price-high"]);
        assert!(matches!(
            cli.map(|cli| cli.command),
            Ok(Commands::Products {
                category: CategoryFilter::All,
                sort: SortKey::PriceHigh,
                ..
            })
        ));
    }
}
