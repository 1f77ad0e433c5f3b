//! Command implementations.
//!
//! Each command runs one shop action, then prints the queued events and, if
//! the action navigated, the page it navigated to.

// Stdout is this binary's interface.
#![allow(clippy::print_stdout)]

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod pages;
pub mod session;
pub mod wishlist;

use shopfront_core::{Page, Product, ProductId};
use shopfront_storefront::events::ShopEvent;
use shopfront_storefront::state::ShopState;
use shopfront_storefront::store::StoreError;
use thiserror::Error;

/// Errors a command reports before or after running its action.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No product with ID {0}")]
    UnknownProduct(ProductId),
    #[error("Product {0} is not in your cart")]
    NotInCart(ProductId),
    #[error("Product {0} is not in your wishlist")]
    NotInWishlist(ProductId),
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Look up a catalog product or fail with [`CommandError::UnknownProduct`].
fn require_product(shop: &ShopState, id: ProductId) -> Result<&Product, CommandError> {
    shop.catalog()
        .find(id)
        .ok_or(CommandError::UnknownProduct(id))
}

/// Print queued events, then render the page the action navigated to.
fn finish(shop: &mut ShopState) -> Result<(), CommandError> {
    let mut navigated = None;
    for event in shop.drain_events() {
        match event {
            ShopEvent::Notice(notice) => {
                println!("[{}] {}", notice.level.as_str(), notice.message);
            }
            ShopEvent::CartChanged { item_count, total } => {
                println!("Cart: {item_count} item(s), total {}", total.display());
            }
            ShopEvent::WishlistChanged { count } => println!("Wishlist: {count} item(s)"),
            ShopEvent::AuthPromptRequested { product_id } => {
                println!("Please log in to add product {product_id} to your cart (`shop login`).");
            }
            ShopEvent::Navigate(page) => navigated = Some(page),
            ShopEvent::ProductsChanged => {}
        }
    }

    match navigated {
        Some(Page::Checkout) => pages::checkout(shop),
        Some(Page::ProductDetail) => pages::product_detail(shop),
        None => Ok(()),
    }
}
