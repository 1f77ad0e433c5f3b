//! Cart commands.

use shopfront_core::ProductId;
use shopfront_storefront::state::ShopState;
use shopfront_storefront::views::CartView;

use super::{CommandError, finish, require_product};

/// Print the cart panel.
pub fn show(shop: &ShopState) {
    let view = CartView::from_lines(shop.cart().lines());
    if view.is_empty() {
        println!("Your cart is empty");
        return;
    }
    for item in &view.items {
        println!(
            "{:>3}  {} {:<24} {:>8} x{:<3} {:>9}",
            item.id, item.image, item.name, item.price, item.quantity, item.line_price
        );
    }
    println!("Total: {} ({} item(s))", view.total, view.item_count);
}

/// Add one of a product.
///
/// # Errors
///
/// Returns an error if the product does not exist.
pub fn add(shop: &mut ShopState, id: ProductId) -> Result<(), CommandError> {
    require_product(shop, id)?;
    shop.add_to_cart(id);
    finish(shop)
}

/// Change a line's quantity.
///
/// # Errors
///
/// Returns an error if the cart has no line for the product.
pub fn quantity(shop: &mut ShopState, id: ProductId, delta: i32) -> Result<(), CommandError> {
    if !shop.cart().contains(id) {
        return Err(CommandError::NotInCart(id));
    }
    shop.update_quantity(id, delta);
    finish(shop)
}

/// Remove a line.
///
/// # Errors
///
/// Returns an error if rendering the result fails.
pub fn remove(shop: &mut ShopState, id: ProductId) -> Result<(), CommandError> {
    shop.remove_from_cart(id);
    finish(shop)
}

/// Hand the whole cart to checkout.
///
/// # Errors
///
/// Returns an error if the checkout page cannot read the hand-off.
pub fn checkout(shop: &mut ShopState) -> Result<(), CommandError> {
    shop.checkout();
    finish(shop)
}

/// Hand a single product to checkout.
///
/// # Errors
///
/// Returns an error if the product does not exist or the hand-off fails.
pub fn buy_now(shop: &mut ShopState, id: ProductId) -> Result<(), CommandError> {
    require_product(shop, id)?;
    shop.buy_now(id);
    finish(shop)
}
