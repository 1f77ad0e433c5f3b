//! Cart manager.
//!
//! Owns the cart lines for the lifetime of the page and mirrors every
//! mutation to durable storage under `cart` before returning, so a reload
//! right after any call sees the change.
//!
//! Adding to the cart is gated on the login flag. When logged out the
//! product id is parked in ephemeral storage (`pendingCartItem`) and the
//! caller is told to show the login prompt; after login the add can be
//! replayed with [`CartManager::take_pending`].

use std::num::NonZeroU32;

use shopfront_core::{BuyNowItem, CartLine, Price, Product, ProductId};

use crate::catalog::Catalog;
use crate::error::{Result, ShopError};
use crate::keys;
use crate::store::{Storage, StoreError};

/// Result of [`CartManager::set_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now has this quantity.
    Updated(u32),
    /// The quantity dropped below 1 and the line was removed.
    Removed,
}

/// The shopper's cart.
#[derive(Debug)]
pub struct CartManager {
    lines: Vec<CartLine>,
    storage: Storage,
    catalog: Catalog,
    buy_now_requires_auth: bool,
}

impl CartManager {
    /// Load the cart from durable storage.
    ///
    /// A missing or malformed stored cart (bad JSON, zero quantities,
    /// repeated product ids) loads as empty.
    #[must_use]
    pub fn load(storage: Storage, catalog: Catalog) -> Self {
        let lines = validated(storage.durable().load_list(keys::durable::CART));
        tracing::debug!(lines = lines.len(), "Loaded cart");
        Self {
            lines,
            storage,
            catalog,
            buy_now_requires_auth: false,
        }
    }

    /// Require the login flag for [`Self::buy_now`] as well as for [`Self::add`].
    #[must_use]
    pub const fn with_buy_now_auth(mut self, required: bool) -> Self {
        self.buy_now_requires_auth = required;
        self
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of items, counting quantities (the cart badge).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |sum, line| sum.saturating_add(line.quantity()))
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add one of `id` to the cart. Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// - [`ShopError::AuthRequired`] when logged out; the id is parked in
    ///   `pendingCartItem` and the cart is untouched
    /// - [`ShopError::NotFound`] if the product is not in the catalog
    /// - [`ShopError::Storage`] if storage fails
    pub fn add(&mut self, id: ProductId) -> Result<u32> {
        if !self.storage.is_logged_in()? {
            self.storage
                .ephemeral()
                .write_json(keys::ephemeral::PENDING_CART_ITEM, &id)?;
            tracing::info!(product_id = %id, "Add to cart deferred until login");
            return Err(ShopError::AuthRequired(id));
        }

        let product = self.catalog.find(id).ok_or(ShopError::NotFound(id))?;
        let mut lines = self.lines.clone();
        let quantity = match lines.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity()
            }
            None => {
                lines.push(CartLine::from_product(product));
                1
            }
        };
        self.commit(lines)?;
        tracing::debug!(product_id = %id, quantity, "Added to cart");
        Ok(quantity)
    }

    /// Change a line's quantity by `delta`. A result below 1 removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] if there is no line for `id`, or a
    /// storage error.
    pub fn set_quantity(&mut self, id: ProductId, delta: i32) -> Result<QuantityChange> {
        let current = self.line(id).ok_or(ShopError::NotFound(id))?.quantity();
        let next = i64::from(current) + i64::from(delta);
        if next < 1 {
            self.remove(id)?;
            return Ok(QuantityChange::Removed);
        }

        let quantity = u32::try_from(next)
            .ok()
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MAX);
        let mut lines = self.lines.clone();
        if let Some(line) = lines.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }
        self.commit(lines)?;
        tracing::debug!(product_id = %id, quantity = quantity.get(), "Updated cart quantity");
        Ok(QuantityChange::Updated(quantity.get()))
    }

    /// Remove the line for `id`, if any. Returns whether a line was removed.
    ///
    /// The cart is persisted either way.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn remove(&mut self, id: ProductId) -> Result<bool> {
        let lines: Vec<CartLine> = self
            .lines
            .iter()
            .filter(|line| line.id != id)
            .cloned()
            .collect();
        let removed = lines.len() != self.lines.len();
        self.commit(lines)?;
        tracing::debug!(product_id = %id, removed, "Removed from cart");
        Ok(removed)
    }

    /// Append a fresh quantity-1 line for a product not yet in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::AlreadyInCart`] if a line exists, or a storage error.
    pub(crate) fn insert_new(&mut self, product: &Product) -> Result<()> {
        if self.contains(product.id) {
            return Err(ShopError::AlreadyInCart(product.id));
        }
        let mut lines = self.lines.clone();
        lines.push(CartLine::from_product(product));
        self.commit(lines)
    }

    /// Snapshot the cart to `checkoutCart` for the checkout page.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::EmptyCart`] if there are no lines, or a storage error.
    pub fn checkout(&self) -> Result<Vec<CartLine>> {
        if self.lines.is_empty() {
            return Err(ShopError::EmptyCart);
        }
        self.storage
            .durable()
            .write_json(keys::durable::CHECKOUT_CART, &self.lines)?;
        tracing::info!(
            lines = self.lines.len(),
            total = %self.total(),
            "Cart handed to checkout"
        );
        Ok(self.lines.clone())
    }

    /// Hand a single quantity-1 order for `id` to the checkout page,
    /// bypassing the cart. The cart itself is not touched.
    ///
    /// # Errors
    ///
    /// - [`ShopError::AuthRequired`] when logged out and buy-now is configured
    ///   to require login (nothing is parked)
    /// - [`ShopError::NotFound`] if the product is not in the catalog
    /// - [`ShopError::Storage`] if storage fails
    pub fn buy_now(&self, id: ProductId) -> Result<BuyNowItem> {
        if self.buy_now_requires_auth && !self.storage.is_logged_in()? {
            return Err(ShopError::AuthRequired(id));
        }
        let product = self.catalog.find(id).ok_or(ShopError::NotFound(id))?;
        let item = BuyNowItem::from(product.clone());
        self.storage
            .ephemeral()
            .write_json(keys::ephemeral::BUY_NOW_PRODUCT, &item)?;
        tracing::info!(product_id = %id, "Buy now handed to checkout");
        Ok(item)
    }

    /// Take the product id parked by a logged-out [`Self::add`], clearing it.
    ///
    /// An unreadable parked value is discarded.
    ///
    /// # Errors
    ///
    /// Returns a storage error if ephemeral storage cannot be accessed.
    pub fn take_pending(&self) -> Result<Option<ProductId>> {
        let ephemeral = self.storage.ephemeral();
        let pending = match ephemeral.read_json::<ProductId>(keys::ephemeral::PENDING_CART_ITEM) {
            Ok(pending) => pending,
            Err(e @ StoreError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "Discarding unreadable pending cart item");
                None
            }
            Err(e) => return Err(e.into()),
        };
        ephemeral.remove(keys::ephemeral::PENDING_CART_ITEM)?;
        Ok(pending)
    }

    fn commit(&mut self, lines: Vec<CartLine>) -> Result<()> {
        self.storage
            .durable()
            .write_json(keys::durable::CART, &lines)?;
        self.lines = lines;
        Ok(())
    }
}

/// Drop a stored cart that holds more than one line per product.
fn validated(lines: Vec<CartLine>) -> Vec<CartLine> {
    let duplicated = lines
        .iter()
        .enumerate()
        .any(|(index, line)| lines.iter().skip(index + 1).any(|other| other.id == line.id));
    if duplicated {
        tracing::warn!("Discarding stored cart with repeated product ids");
        return Vec::new();
    }
    lines
}
