//! Wishlist manager.
//!
//! Like the cart but without quantities: each entry is the full product
//! record as it was when saved. Persisted under `wishlist` after every
//! change.

use shopfront_core::{Product, ProductId, WishlistEntry};

use crate::cart::CartManager;
use crate::catalog::Catalog;
use crate::error::{Result, ShopError};
use crate::keys;
use crate::store::Storage;

/// Result of [`WishlistManager::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// The shopper's wishlist.
#[derive(Debug)]
pub struct WishlistManager {
    entries: Vec<WishlistEntry>,
    storage: Storage,
    catalog: Catalog,
}

impl WishlistManager {
    /// Load the wishlist from durable storage; missing or malformed data loads as empty.
    #[must_use]
    pub fn load(storage: Storage, catalog: Catalog) -> Self {
        let mut entries: Vec<WishlistEntry> =
            storage.durable().load_list(keys::durable::WISHLIST);
        let stored = entries.len();
        let mut seen = Vec::with_capacity(stored);
        entries.retain(|entry| {
            let first = !seen.contains(&entry.id());
            seen.push(entry.id());
            first
        });
        if entries.len() != stored {
            tracing::warn!(
                dropped = stored - entries.len(),
                "Dropped repeated wishlist entries"
            );
        }
        tracing::debug!(entries = entries.len(), "Loaded wishlist");
        Self {
            entries,
            storage,
            catalog,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }

    /// Number of saved products (the wishlist badge).
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Save `id` if absent, otherwise remove it.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] if the product is not in the catalog,
    /// or a storage error.
    pub fn toggle(&mut self, id: ProductId) -> Result<Toggled> {
        let product = self.catalog.find(id).ok_or(ShopError::NotFound(id))?;
        let mut entries = self.entries.clone();
        let toggled = if let Some(index) = entries.iter().position(|entry| entry.id() == id) {
            entries.remove(index);
            Toggled::Removed
        } else {
            entries.push(WishlistEntry::from(product.clone()));
            Toggled::Added
        };
        self.commit(entries)?;
        tracing::debug!(product_id = %id, ?toggled, "Toggled wishlist");
        Ok(toggled)
    }

    /// Remove `id` if saved. Returns whether an entry was removed; nothing is
    /// written when there was nothing to remove.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn remove(&mut self, id: ProductId) -> Result<bool> {
        if !self.contains(id) {
            return Ok(false);
        }
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.id() != id)
            .cloned()
            .collect();
        self.commit(entries)?;
        tracing::debug!(product_id = %id, "Removed from wishlist");
        Ok(true)
    }

    /// Move a product from the wishlist into the cart with quantity 1.
    ///
    /// The cart is written first, then the wishlist. If the wishlist write
    /// fails the new cart line is removed again. A product that is already
    /// in the cart leaves both lists untouched.
    ///
    /// # Errors
    ///
    /// - [`ShopError::NotFound`] if the product is not in the catalog
    /// - [`ShopError::AlreadyInCart`] if the cart already has a line for it
    /// - [`ShopError::Storage`] if storage fails
    pub fn move_to_cart(&mut self, id: ProductId, cart: &mut CartManager) -> Result<()> {
        let product: Product = self
            .catalog
            .find(id)
            .ok_or(ShopError::NotFound(id))?
            .clone();
        cart.insert_new(&product)?;
        if let Err(e) = self.remove(id) {
            if let Err(undo) = cart.remove(id) {
                tracing::error!(product_id = %id, error = %undo, "Failed to undo cart insert");
            }
            return Err(e);
        }
        tracing::debug!(product_id = %id, "Moved wishlist item to cart");
        Ok(())
    }

    fn commit(&mut self, entries: Vec<WishlistEntry>) -> Result<()> {
        self.storage
            .durable()
            .write_json(keys::durable::WISHLIST, &entries)?;
        self.entries = entries;
        Ok(())
    }
}
