//! Page state shared across handlers.
//!
//! [`ShopState`] is the one object a page keeps for its lifetime. It owns
//! the cart and wishlist managers, the grid controls and the carousel, and
//! loads everything from storage when constructed. Each action method runs
//! to completion, persists before returning, and queues the events the
//! renderer needs. Failed actions never propagate: they become a toast, the
//! login prompt, or nothing, and the method returns `false`.

use shopfront_core::{CategoryFilter, Page, Product, ProductId, SortKey};
use tracing::instrument;

use crate::carousel::Carousel;
use crate::cart::{CartManager, QuantityChange};
use crate::catalog::Catalog;
use crate::config::{ConfigError, ShopConfig, ShopSettings};
use crate::error::ShopError;
use crate::events::{EventQueue, Notification, ShopEvent, messages};
use crate::keys;
use crate::search::QueryState;
use crate::store::{FileStore, MemoryStore, Storage};
use crate::wishlist::{Toggled, WishlistManager};

/// State of one shop page.
#[derive(Debug)]
pub struct ShopState {
    storage: Storage,
    catalog: Catalog,
    cart: CartManager,
    wishlist: WishlistManager,
    query: QueryState,
    carousel: Carousel,
    events: EventQueue,
}

impl ShopState {
    /// Load cart and wishlist from `storage`.
    #[must_use]
    pub fn load(storage: Storage, catalog: Catalog, settings: ShopSettings) -> Self {
        let cart = CartManager::load(storage.clone(), catalog.clone())
            .with_buy_now_auth(settings.buy_now_requires_auth);
        let wishlist = WishlistManager::load(storage.clone(), catalog.clone());
        tracing::info!(
            products = catalog.len(),
            cart_items = cart.item_count(),
            wishlist_items = wishlist.count(),
            "Shop state loaded"
        );
        Self {
            storage,
            catalog,
            cart,
            wishlist,
            query: QueryState::default(),
            carousel: Carousel::new(settings.viewport_width),
            events: EventQueue::new(),
        }
    }

    /// Open the shop described by `config`: durable storage in the data
    /// directory, ephemeral storage in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn open(config: &ShopConfig) -> Result<Self, ConfigError> {
        let catalog = config.load_catalog()?;
        let durable = FileStore::new(config.data_dir());
        tracing::info!(data_dir = %durable.dir().display(), "Opening shop storage");
        let storage = Storage::new(durable, MemoryStore::new());
        Ok(Self::load(storage, catalog, config.settings))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartManager {
        &self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistManager {
        &self.wishlist
    }

    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    #[must_use]
    pub const fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Carousel controls. Purely presentational, so no events are queued.
    pub const fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<ShopEvent> {
        self.events.drain()
    }

    // =========================================================================
    // Cart Actions
    // =========================================================================

    /// "Add to Cart" button.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, id: ProductId) -> bool {
        match self.cart.add(id) {
            Ok(_) => {
                self.events
                    .notify(Notification::success(messages::ADDED_TO_CART));
                self.publish_cart();
                true
            }
            Err(e) => self.report(e),
        }
    }

    /// Quantity `+`/`-` buttons in the cart panel.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: ProductId, delta: i32) -> bool {
        match self.cart.set_quantity(id, delta) {
            Ok(QuantityChange::Updated(_)) => {
                self.publish_cart();
                true
            }
            Ok(QuantityChange::Removed) => {
                self.events
                    .notify(Notification::success(messages::REMOVED_FROM_CART));
                self.publish_cart();
                true
            }
            Err(e) => self.report(e),
        }
    }

    /// Remove button in the cart panel.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        match self.cart.remove(id) {
            Ok(_) => {
                self.events
                    .notify(Notification::success(messages::REMOVED_FROM_CART));
                self.publish_cart();
                true
            }
            Err(e) => self.report(e),
        }
    }

    /// "Checkout" button: hand the cart to the checkout page.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> bool {
        match self.cart.checkout() {
            Ok(_) => {
                self.events.push(ShopEvent::Navigate(Page::Checkout));
                true
            }
            Err(e) => self.report(e),
        }
    }

    /// "Buy Now" button: hand a single item to the checkout page.
    #[instrument(skip(self))]
    pub fn buy_now(&mut self, id: ProductId) -> bool {
        match self.cart.buy_now(id) {
            Ok(_) => {
                self.events.push(ShopEvent::Navigate(Page::Checkout));
                true
            }
            Err(e) => self.report(e),
        }
    }

    /// Replay an add-to-cart that was deferred for login.
    ///
    /// Does nothing while still logged out; the parked item stays parked.
    #[instrument(skip(self))]
    pub fn resume_pending(&mut self) -> bool {
        match self.storage.is_logged_in() {
            Ok(true) => {}
            Ok(false) => return false,
            Err(e) => return self.report(e.into()),
        }
        match self.cart.take_pending() {
            Ok(Some(id)) => self.add_to_cart(id),
            Ok(None) => false,
            Err(e) => self.report(e),
        }
    }

    // =========================================================================
    // Wishlist Actions
    // =========================================================================

    /// Heart button on a product card.
    #[instrument(skip(self))]
    pub fn toggle_wishlist(&mut self, id: ProductId) -> bool {
        match self.wishlist.toggle(id) {
            Ok(toggled) => {
                let notice = match toggled {
                    Toggled::Added => Notification::success(messages::ADDED_TO_WISHLIST),
                    Toggled::Removed => Notification::info(messages::REMOVED_FROM_WISHLIST),
                };
                self.events.notify(notice);
                self.publish_wishlist();
                true
            }
            Err(e) => {
                // The rollback itself can fail and leave the new line behind.
                if self.cart.contains(id) != had_line {
                    self.publish_cart();
                }
                self.report(e)
            }
        }
    }

    /// Trash button in the wishlist panel.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, id: ProductId) -> bool {
        match self.wishlist.remove(id) {
            Ok(true) => {
                self.events
                    .notify(Notification::info(messages::REMOVED_FROM_WISHLIST));
                self.publish_wishlist();
                true
            }
            Ok(false) => false,
            Err(e) => self.report(e),
        }
    }

    /// "Move to Cart" button in the wishlist panel.
    #[instrument(skip(self))]
    pub fn move_to_cart(&mut self, id: ProductId) -> bool {
        let had_line = self.cart.contains(id);
        match self.wishlist.move_to_cart(id, &mut self.cart) {
            Ok(()) => {
                self.events
                    .notify(Notification::success(messages::MOVED_TO_CART));
                self.publish_cart();
                self.publish_wishlist();
                true
            }
            Err(e) => self.report(e),
        }
    }

    // =========================================================================
    // Product Grid
    // =========================================================================

    /// Open the product detail page for `id`.
    #[instrument(skip(self))]
    pub fn view_product(&mut self, id: ProductId) -> bool {
        let Some(product) = self.catalog.find(id) else {
            return self.report(ShopError::NotFound(id));
        };
        match self
            .storage
            .ephemeral()
            .write_json(keys::ephemeral::SELECTED_PRODUCT, product)
        {
            Ok(()) => {
                self.events.push(ShopEvent::Navigate(Page::ProductDetail));
                true
            }
            Err(e) => self.report(e.into()),
        }
    }

    /// Category filter buttons.
    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!(%category, "Category filter changed");
        self.query.category = category;
        self.events.push(ShopEvent::ProductsChanged);
    }

    /// Sort dropdown.
    pub fn set_sort(&mut self, sort: SortKey) {
        tracing::debug!(%sort, "Sort changed");
        self.query.sort = sort;
        self.events.push(ShopEvent::ProductsChanged);
    }

    /// Search box.
    pub fn search(&mut self, term: &str) {
        tracing::debug!(term, "Search changed");
        term.clone_into(&mut self.query.search);
        self.events.push(ShopEvent::ProductsChanged);
    }

    /// Products the grid should show for the current controls.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.query.apply(&self.catalog)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn publish_cart(&mut self) {
        self.events.push(ShopEvent::CartChanged {
            item_count: self.cart.item_count(),
            total: self.cart.total(),
        });
    }

    fn publish_wishlist(&mut self) {
        self.events.push(ShopEvent::WishlistChanged {
            count: self.wishlist.count(),
        });
        // Hearts on the product cards follow the wishlist.
        self.events.push(ShopEvent::ProductsChanged);
    }

    /// Turn a failed action into events. Always returns `false`.
    fn report(&mut self, error: ShopError) -> bool {
        match &error {
            ShopError::AuthRequired(product_id) => {
                self.events.push(ShopEvent::AuthPromptRequested {
                    product_id: *product_id,
                });
            }
            ShopError::Storage(e) => {
                tracing::error!(error = %e, "Storage failure");
            }
            ShopError::NotFound(product_id) => {
                tracing::debug!(%product_id, "Ignoring action on unknown product");
            }
            ShopError::EmptyCart | ShopError::AlreadyInCart(_) => {
                tracing::info!(%error, "Action rejected");
            }
        }
        if let Some(notice) = error.notification() {
            self.events.notify(notice);
        }
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::{NoticeLevel, Price};

    use super::*;
    use crate::testing::{catalog, flaky_storage, logged_in_storage};

    fn id(n: i32) -> ProductId {
        ProductId::new(n)
    }

    fn shop(storage: Storage) -> ShopState {
        ShopState::load(storage, catalog(), ShopSettings::default())
    }

    fn notices(events: &[ShopEvent]) -> Vec<(NoticeLevel, String)> {
        events
            .iter()
            .filter_map(|event| match event {
                ShopEvent::Notice(n) => Some((n.level, n.message.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_add_to_cart_events() {
        let mut shop = shop(logged_in_storage());
        assert!(shop.add_to_cart(id(2)));
        assert!(shop.add_to_cart(id(2)));

        let events = shop.drain_events();
        assert_eq!(
            notices(&events),
            vec![
                (NoticeLevel::Success, "Item added to cart!".to_string()),
                (NoticeLevel::Success, "Item added to cart!".to_string()),
            ]
        );
        assert_eq!(
            events.last(),
            Some(&ShopEvent::CartChanged {
                item_count: 2,
                total: Price::from_whole(200)
            })
        );
    }

    #[test]
    fn test_logged_out_add_prompts_then_resumes() {
        let storage = Storage::in_memory();
        let mut shop = shop(storage.clone());

        assert!(!shop.add_to_cart(id(3)));
        assert_eq!(
            shop.drain_events(),
            vec![ShopEvent::AuthPromptRequested { product_id: id(3) }]
        );
        assert!(shop.cart().is_empty());

        // Still logged out: stays parked.
        assert!(!shop.resume_pending());
        assert!(shop.drain_events().is_empty());

        storage.set_logged_in(true).unwrap();
        assert!(shop.resume_pending());
        assert_eq!(shop.cart().line(id(3)).unwrap().quantity(), 1);
        assert!(!shop.resume_pending());
    }

    #[test]
    fn test_unknown_product_is_silent() {
        let mut shop = shop(logged_in_storage());
        assert!(!shop.add_to_cart(id(77)));
        assert!(!shop.toggle_wishlist(id(77)));
        assert!(!shop.view_product(id(77)));
        assert!(shop.drain_events().is_empty());
    }

    #[test]
    fn test_quantity_to_zero_notifies_removal() {
        let mut shop = shop(logged_in_storage());
        shop.add_to_cart(id(1));
        shop.drain_events();

        assert!(shop.update_quantity(id(1), -1));
        let events = shop.drain_events();
        assert_eq!(
            notices(&events),
            vec![(NoticeLevel::Success, "Item removed from cart!".to_string())]
        );
        assert!(shop.cart().is_empty());

        // Absent line: silent no-op.
        assert!(!shop.update_quantity(id(1), 1));
        assert!(shop.drain_events().is_empty());
    }

    #[test]
    fn test_checkout_empty_and_full() {
        let mut shop = shop(logged_in_storage());
        assert!(!shop.checkout());
        assert_eq!(
            notices(&shop.drain_events()),
            vec![(NoticeLevel::Error, "Your cart is empty!".to_string())]
        );

        shop.add_to_cart(id(5));
        shop.drain_events();
        assert!(shop.checkout());
        assert_eq!(
            shop.drain_events(),
            vec![ShopEvent::Navigate(Page::Checkout)]
        );
    }

    #[test]
    fn test_buy_now_navigates_without_touching_cart() {
        let mut shop = shop(Storage::in_memory());
        assert!(shop.buy_now(id(4)));
        assert_eq!(
            shop.drain_events(),
            vec![ShopEvent::Navigate(Page::Checkout)]
        );
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_buy_now_gated_when_configured() {
        let settings = ShopSettings {
            buy_now_requires_auth: true,
            ..ShopSettings::default()
        };
        let mut shop = ShopState::load(Storage::in_memory(), catalog(), settings);
        assert!(!shop.buy_now(id(4)));
        assert_eq!(
            shop.drain_events(),
            vec![ShopEvent::AuthPromptRequested { product_id: id(4) }]
        );
    }

    #[test]
    fn test_toggle_wishlist_messages() {
        let mut shop = shop(Storage::in_memory());
        assert!(shop.toggle_wishlist(id(1)));
        assert!(shop.toggle_wishlist(id(1)));
        let events = shop.drain_events();
        assert_eq!(
            notices(&events),
            vec![
                (NoticeLevel::Success, "Added to Wishlist!".to_string()),
                (NoticeLevel::Info, "Removed from Wishlist!".to_string()),
            ]
        );
        assert!(events.contains(&ShopEvent::WishlistChanged { count: 0 }));
        assert!(events.contains(&ShopEvent::ProductsChanged));
    }

    #[test]
    fn test_move_to_cart_duplicate() {
        let mut shop = shop(logged_in_storage());
        shop.add_to_cart(id(2));
        shop.toggle_wishlist(id(2));
        shop.drain_events();

        assert!(!shop.move_to_cart(id(2)));
        assert_eq!(
            shop.drain_events(),
            vec![ShopEvent::Notice(Notification::info(
                "This item is already in your cart!"
            ))]
        );
        assert!(shop.wishlist().contains(id(2)));
        assert_eq!(shop.cart().item_count(), 1);
    }

    #[test]
    fn test_move_to_cart() {
        let mut shop = shop(logged_in_storage());
        shop.toggle_wishlist(id(2));
        shop.drain_events();

        assert!(shop.move_to_cart(id(2)));
        let events = shop.drain_events();
        assert_eq!(
            notices(&events),
            vec![(NoticeLevel::Success, "Item moved to cart!".to_string())]
        );
        assert!(events.contains(&ShopEvent::CartChanged {
            item_count: 1,
            total: Price::from_whole(100)
        }));
        assert!(events.contains(&ShopEvent::WishlistChanged { count: 0 }));
    }

    #[test]
    fn test_remove_from_wishlist_absent_is_quiet() {
        let mut shop = shop(Storage::in_memory());
        assert!(!shop.remove_from_wishlist(id(1)));
        assert!(shop.drain_events().is_empty());
    }

    #[test]
    fn test_view_product_hands_off_snapshot() {
        let storage = Storage::in_memory();
        let mut shop = shop(storage.clone());
        assert!(shop.view_product(id(3)));
        assert_eq!(
            shop.drain_events(),
            vec![ShopEvent::Navigate(Page::ProductDetail)]
        );
        let stored: Product = storage
            .ephemeral()
            .read_json("selectedProduct")
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Desk");
    }

    #[test]
    fn test_grid_controls_compose() {
        let mut shop = shop(Storage::in_memory());
        shop.set_category(CategoryFilter::parse("A").unwrap());
        shop.set_sort(SortKey::PriceLow);
        shop.search("  ");
        assert_eq!(shop.drain_events().len(), 3);

        let names: Vec<&str> = shop
            .visible_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Vase", "Desk", "Lamp"]);

        shop.search("desk");
        assert_eq!(shop.visible_products().len(), 1);
        shop.search("nothing like this");
        assert!(shop.visible_products().is_empty());
    }

    #[test]
    fn test_failed_writes_leave_state_and_show_one_toast() {
        let (storage, durable) = flaky_storage();
        let mut shop = shop(storage);
        assert!(shop.add_to_cart(id(1)));
        assert!(shop.toggle_wishlist(id(5)));
        shop.drain_events();
        let lines = shop.cart().lines().to_vec();
        let entries = shop.wishlist().entries().to_vec();
        let storage_toast = vec![ShopEvent::Notice(Notification::error(
            messages::STORAGE_FAILED,
        ))];

        durable.fail_writes_to("cart");
        assert!(!shop.add_to_cart(id(2)));
        assert_eq!(shop.drain_events(), storage_toast);
        assert!(!shop.update_quantity(id(1), 1));
        assert_eq!(shop.drain_events(), storage_toast);
        assert_eq!(shop.cart().lines(), lines.as_slice());

        durable.fail_writes_to("wishlist");
        assert!(!shop.toggle_wishlist(id(3)));
        assert_eq!(shop.drain_events(), storage_toast);
        assert!(!shop.toggle_wishlist(id(5)));
        assert_eq!(shop.drain_events(), storage_toast);
        assert_eq!(shop.wishlist().entries(), entries.as_slice());
    }

    #[test]
    fn test_move_to_cart_failure_keeps_item_in_one_list() {
        let (storage, durable) = flaky_storage();
        let mut shop = shop(storage.clone());
        assert!(shop.toggle_wishlist(id(2)));
        shop.drain_events();
        durable.fail_writes_to("wishlist");

        assert!(!shop.move_to_cart(id(2)));
        assert_eq!(
            shop.drain_events(),
            vec![ShopEvent::Notice(Notification::error(messages::STORAGE_FAILED))]
        );
        assert!(shop.wishlist().contains(id(2)));
        assert!(!shop.cart().contains(id(2)));

        let reloaded = ShopState::load(storage, catalog(), ShopSettings::default());
        assert!(reloaded.wishlist().contains(id(2)));
        assert!(reloaded.cart().lines().is_empty());
    }

    #[test]
    fn test_state_survives_reload() {
        let storage = logged_in_storage();
        let mut first = shop(storage.clone());
        first.add_to_cart(id(1));
        first.add_to_cart(id(4));
        first.update_quantity(id(4), 2);
        first.toggle_wishlist(id(5));

        let second = shop(storage);
        assert_eq!(second.cart().lines(), first.cart().lines());
        assert_eq!(second.wishlist().entries(), first.wishlist().entries());
        assert_eq!(second.query(), &QueryState::default());
    }

    #[test]
    fn test_open_uses_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShopConfig::from_lookup(|key| {
            (key == "SHOPFRONT_DATA_DIR").then(|| dir.path().display().to_string())
        })
        .unwrap();

        let mut shop = ShopState::open(&config).unwrap();
        shop.storage().set_logged_in(true).unwrap();
        assert!(shop.add_to_cart(id(1)));
        assert!(dir.path().join("cart.json").exists());
    }
}
