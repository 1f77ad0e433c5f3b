//! Login flag commands.
//!
//! The shop only reads `isLoggedIn`; these stand in for the auth pages that
//! own it.

use shopfront_storefront::state::ShopState;

use super::{CommandError, finish};

/// Set the login flag and replay any add-to-cart deferred for login.
///
/// # Errors
///
/// Returns an error if the flag cannot be written.
pub fn login(shop: &mut ShopState) -> Result<(), CommandError> {
    shop.storage().set_logged_in(true)?;
    tracing::info!("Logged in");
    println!("Logged in.");
    shop.resume_pending();
    finish(shop)
}

/// Clear the login flag. Cart and wishlist are kept.
///
/// # Errors
///
/// Returns an error if the flag cannot be written.
pub fn logout(shop: &ShopState) -> Result<(), CommandError> {
    shop.storage().set_logged_in(false)?;
    tracing::info!("Logged out");
    println!("Logged out.");
    Ok(())
}
