//! Unified error handling for shop actions.
//!
//! Provides a unified `ShopError` type. None of these are fatal: the state
//! container turns each one into events (a toast, the login prompt, or
//! nothing at all) and the page carries on.

use shopfront_core::ProductId;
use thiserror::Error;

use crate::events::{Notification, messages};
use crate::store::StoreError;

/// Outcome of a shop action that did not go through.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Product id is not in the catalog (or not in the list acted on).
    #[error("Not found: product {0}")]
    NotFound(ProductId),

    /// Checkout attempted with no cart lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// Cart mutation attempted while logged out; the action was deferred.
    #[error("Login required to add product {0}")]
    AuthRequired(ProductId),

    /// Wishlist item moved to a cart that already holds it.
    #[error("Product {0} is already in the cart")]
    AlreadyInCart(ProductId),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl ShopError {
    /// Toast shown for this error, if any.
    ///
    /// Missing products are ignored silently and login is handled by the
    /// auth prompt, so neither shows a toast. Storage details are not shown
    /// to the shopper.
    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::NotFound(_) | Self::AuthRequired(_) => None,
            Self::EmptyCart => Some(Notification::error(messages::CART_EMPTY)),
            Self::AlreadyInCart(_) => Some(Notification::info(messages::ALREADY_IN_CART)),
            Self::Storage(_) => Some(Notification::error(messages::STORAGE_FAILED)),
        }
    }
}

/// Result type alias for `ShopError`.
pub type Result<T> = std::result::Result<T, ShopError>;
