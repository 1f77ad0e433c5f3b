//! Notifications and state-change events for the renderer.
//!
//! Actions on [`crate::state::ShopState`] never render anything themselves.
//! They queue [`ShopEvent`]s which the page drains after each action to
//! update badges, show toasts, open the login prompt or navigate.

use shopfront_core::{NoticeLevel, Page, Price, ProductId};

/// Toast texts shown to shoppers.
pub mod messages {
    pub const ADDED_TO_CART: &str = "Item added to cart!";
    pub const REMOVED_FROM_CART: &str = "Item removed from cart!";
    pub const CART_EMPTY: &str = "Your cart is empty!";
    pub const ADDED_TO_WISHLIST: &str = "Added to Wishlist!";
    pub const REMOVED_FROM_WISHLIST: &str = "Removed from Wishlist!";
    pub const ALREADY_IN_CART: &str = "This item is already in your cart!";
    pub const MOVED_TO_CART: &str = "Item moved to cart!";
    pub const STORAGE_FAILED: &str = "Something went wrong saving your changes. Please try again.";
}

/// A transient, auto-dismissing toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notification {
    #[must_use]
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }
}

/// Something the renderer has to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopEvent {
    /// Show a toast.
    Notice(Notification),
    /// Cart contents changed; refresh the badge and the cart panel.
    CartChanged { item_count: u32, total: Price },
    /// Wishlist changed; refresh the badge, hearts and wishlist panel.
    WishlistChanged { count: usize },
    /// Filter, search or sort changed; re-render the product grid.
    ProductsChanged,
    /// Adding to the cart needs a login; open the auth prompt.
    AuthPromptRequested { product_id: ProductId },
    /// Leave for another page. Hand-off data is already in storage.
    Navigate(Page),
}

/// Events queued since the renderer last drained them.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ShopEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ShopEvent) {
        tracing::trace!(?event, "Queued event");
        self.events.push(event);
    }

    pub fn notify(&mut self, notification: Notification) {
        self.push(ShopEvent::Notice(notification));
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<ShopEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let mut queue = EventQueue::new();
        queue.notify(Notification::success(messages::ADDED_TO_CART));
        queue.push(ShopEvent::ProductsChanged);
        assert_eq!(queue.len(), 2);

        let events = queue.drain();
        assert_eq!(
            events,
            vec![
                ShopEvent::Notice(Notification::success("Item added to cart!")),
                ShopEvent::ProductsChanged,
            ]
        );
        assert!(queue.is_empty());
    }
}
