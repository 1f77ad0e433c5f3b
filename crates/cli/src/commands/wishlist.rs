//! Wishlist commands.

use shopfront_core::ProductId;
use shopfront_storefront::state::ShopState;
use shopfront_storefront::views::WishlistView;

use super::{CommandError, finish, require_product};

/// Print the wishlist panel.
pub fn show(shop: &ShopState) {
    let view = WishlistView::from_entries(shop.wishlist().entries());
    println!("{}", view.title());
    if view.is_empty() {
        println!("Your wishlist is empty");
        return;
    }
    for item in &view.items {
        println!(
            "{:>3}  {} {:<24} {:>8} {:>8}  {}",
            item.id, item.image, item.name, item.price, item.original_price, item.discount
        );
    }
}

/// Save or unsave a product.
///
/// # Errors
///
/// Returns an error if the product does not exist.
pub fn toggle(shop: &mut ShopState, id: ProductId) -> Result<(), CommandError> {
    require_product(shop, id)?;
    shop.toggle_wishlist(id);
    finish(shop)
}

/// Remove a saved product.
///
/// # Errors
///
/// Returns an error if the product is not saved.
pub fn remove(shop: &mut ShopState, id: ProductId) -> Result<(), CommandError> {
    if !shop.wishlist().contains(id) {
        return Err(CommandError::NotInWishlist(id));
    }
    shop.remove_from_wishlist(id);
    finish(shop)
}

/// Move a saved product into the cart.
///
/// # Errors
///
/// Returns an error if the product does not exist.
pub fn move_to_cart(shop: &mut ShopState, id: ProductId) -> Result<(), CommandError> {
    require_product(shop, id)?;
    shop.move_to_cart(id);
    finish(shop)
}
