//! Stand-ins for the checkout and product detail pages.
//!
//! They read only what the shop handed off through storage, the same way
//! the real pages would after navigation.

use shopfront_core::{BuyNowItem, CartLine, Page, Price, Product};
use shopfront_storefront::keys;
use shopfront_storefront::state::ShopState;
use shopfront_storefront::views::{CartView, ProductCardView};

use super::CommandError;

/// Order summary for a "Buy Now" item, or else the checked-out cart.
///
/// # Errors
///
/// Returns an error if the hand-off data cannot be read.
pub fn checkout(shop: &ShopState) -> Result<(), CommandError> {
    let storage = shop.storage();
    println!("--> {}", Page::Checkout.path());

    if let Some(item) = storage
        .ephemeral()
        .read_json::<BuyNowItem>(keys::ephemeral::BUY_NOW_PRODUCT)?
    {
        let product = &item.product;
        println!("Order summary");
        println!("  {} x{}  {}", product.name, item.quantity, product.price.display());
        println!("  Total: {}", product.price.times(item.quantity).display());
        return Ok(());
    }

    let lines: Vec<CartLine> = storage
        .durable()
        .read_json(keys::durable::CHECKOUT_CART)?
        .unwrap_or_default();
    let view = CartView::from_lines(&lines);
    println!("Order summary");
    for item in &view.items {
        println!("  {} x{}  {}", item.name, item.quantity, item.line_price);
    }
    println!("  Total: {}", view.total);
    tracing::debug!(
        lines = lines.len(),
        total = %lines.iter().map(CartLine::line_total).sum::<Price>(),
        "Rendered checkout"
    );
    Ok(())
}

/// Detail view of the selected product.
///
/// # Errors
///
/// Returns an error if the hand-off data cannot be read.
pub fn product_detail(shop: &ShopState) -> Result<(), CommandError> {
    println!("--> {}", Page::ProductDetail.path());
    let Some(product) = shop
        .storage()
        .ephemeral()
        .read_json::<Product>(keys::ephemeral::SELECTED_PRODUCT)?
    else {
        println!("No product selected.");
        return Ok(());
    };

    let card = ProductCardView::new(&product, shop.wishlist().contains(product.id));
    println!("{} {} [{}]", card.image, card.name, card.badge);
    println!(
        "  {}  (was {}, {})",
        card.price, card.original_price, card.discount
    );
    println!("  {} ({})", card.stars, card.rating);
    println!("  Category: {}", product.category);
    println!("  {}", product.description);
    if card.in_wishlist {
        println!("  In your wishlist");
    }
    Ok(())
}
