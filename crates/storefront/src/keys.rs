//! Storage keys shared with the other shop pages.
//!
//! The names and value shapes are a contract: the product detail and
//! checkout pages read them back, so they must not change.

/// Keys in durable storage (survive reloads).
pub mod durable {
    /// Cart lines, a JSON array of `CartLine`.
    pub const CART: &str = "cart";

    /// Wishlist, a JSON array of product snapshots.
    pub const WISHLIST: &str = "wishlist";

    /// Login flag written by the auth pages; logged in iff the raw value is `"true"`.
    pub const IS_LOGGED_IN: &str = "isLoggedIn";

    /// Cart snapshot handed to the checkout page.
    pub const CHECKOUT_CART: &str = "checkoutCart";
}

/// Keys in ephemeral storage (survive a single navigation).
pub mod ephemeral {
    /// Product snapshot for the product detail page.
    pub const SELECTED_PRODUCT: &str = "selectedProduct";

    /// Product id whose add-to-cart waits for login.
    pub const PENDING_CART_ITEM: &str = "pendingCartItem";

    /// Single-item order for the checkout page.
    pub const BUY_NOW_PRODUCT: &str = "buyNowProduct";
}

/// Raw value of [`durable::IS_LOGGED_IN`] meaning "logged in".
pub const LOGGED_IN: &str = "true";
