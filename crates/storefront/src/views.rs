//! Display data for the cart panel, product grid and wishlist panel.
//!
//! Plain structs with every price already formatted, so a renderer only has
//! to place strings.

use shopfront_core::{CartLine, Price, Product, ProductId, WishlistEntry};

use crate::state::ShopState;

/// Full star.
pub const STAR_FULL: char = '★';
/// Marker appended for a fractional rating.
pub const STAR_PARTIAL: char = '☆';

// =============================================================================
// Cart
// =============================================================================

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart panel display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Build from cart lines.
    #[must_use]
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            total: lines.iter().map(CartLine::line_total).sum::<Price>().display(),
            item_count: lines
                .iter()
                .fold(0_u32, |count, line| count.saturating_add(line.quantity())),
        }
    }

    /// "Your cart is empty" state; the total row is hidden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            image: line.image.clone(),
            quantity: line.quantity(),
            price: line.price.display(),
            line_price: line.line_total().display(),
        }
    }
}

// =============================================================================
// Product Grid
// =============================================================================

/// Product card display data.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub badge: String,
    pub price: String,
    pub original_price: String,
    pub discount: String,
    pub stars: String,
    pub rating: f64,
    /// Heart button shown as active.
    pub in_wishlist: bool,
}

impl ProductCardView {
    #[must_use]
    pub fn new(product: &Product, in_wishlist: bool) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            badge: product.badge.clone(),
            price: product.price.display(),
            original_price: product.original_price.display(),
            discount: discount_label(product.discount),
            stars: stars(product.rating),
            rating: product.rating,
            in_wishlist,
        }
    }
}

/// What the product grid shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductGrid {
    Products(Vec<ProductCardView>),
    /// Nothing matched the filters.
    Empty,
}

impl ProductGrid {
    /// Cards for the shop's current grid controls.
    #[must_use]
    pub fn for_shop(shop: &ShopState) -> Self {
        let cards: Vec<ProductCardView> = shop
            .visible_products()
            .into_iter()
            .map(|product| ProductCardView::new(product, shop.wishlist().contains(product.id)))
            .collect();
        if cards.is_empty() {
            Self::Empty
        } else {
            Self::Products(cards)
        }
    }
}

// =============================================================================
// Wishlist
// =============================================================================

/// Wishlist item display data, taken from the saved snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistItemView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub original_price: String,
    pub discount: String,
}

/// Wishlist panel display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistView {
    pub items: Vec<WishlistItemView>,
}

impl WishlistView {
    #[must_use]
    pub fn from_entries(entries: &[WishlistEntry]) -> Self {
        Self {
            items: entries.iter().map(WishlistItemView::from).collect(),
        }
    }

    /// Panel heading, e.g. "My Wishlist (2)".
    #[must_use]
    pub fn title(&self) -> String {
        format!("My Wishlist ({})", self.items.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&WishlistEntry> for WishlistItemView {
    fn from(entry: &WishlistEntry) -> Self {
        let product = entry.product();
        Self {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price.display(),
            original_price: product.original_price.display(),
            discount: discount_label(product.discount),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// "40% OFF".
#[must_use]
pub fn discount_label(discount: u8) -> String {
    format!("{discount}% OFF")
}

/// One full star per whole rating point, plus [`STAR_PARTIAL`] if the
/// rating has a fractional part.
#[must_use]
pub fn stars(rating: f64) -> String {
    let full = (1..=5_u8).filter(|n| f64::from(*n) <= rating).count();
    let mut out: String = std::iter::repeat_n(STAR_FULL, full).collect();
    if rating.fract() > 0.0 {
        out.push(STAR_PARTIAL);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::{CategoryFilter, Price};

    use super::*;
    use crate::config::ShopSettings;
    use crate::store::Storage;
    use crate::testing::{catalog, logged_in_storage, product};

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.5), "★★★★☆");
        assert_eq!(stars(4.0), "★★★★");
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(0.3), "☆");
    }

    #[test]
    fn test_product_card() {
        let card = ProductCardView::new(&product(7, "Lamp", "A", 1499), true);
        assert_eq!(card.price, "₹1499");
        assert_eq!(card.original_price, "₹2998");
        assert_eq!(card.discount, "50% OFF");
        assert_eq!(card.stars, "★★★★☆");
        assert!(card.in_wishlist);
    }

    #[test]
    fn test_cart_view() {
        let mut lamp = CartLine::from_product(&product(1, "Lamp", "A", 300));
        lamp.quantity = std::num::NonZeroU32::new(3).unwrap();
        let rug = CartLine::from_product(&product(4, "Rug", "B", 50));

        let view = CartView::from_lines(&[lamp, rug]);
        assert_eq!(view.item_count, 4);
        assert_eq!(view.total, "₹950");
        assert_eq!(view.items[0].price, "₹300");
        assert_eq!(view.items[0].line_price, "₹900");
        assert!(!view.is_empty());

        let empty = CartView::from_lines(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.total, Price::ZERO.display());
    }

    #[test]
    fn test_grid_marks_wishlist_and_goes_empty() {
        let mut shop = ShopState::load(logged_in_storage(), catalog(), ShopSettings::default());
        shop.toggle_wishlist(ProductId::new(2));

        let ProductGrid::Products(cards) = ProductGrid::for_shop(&shop) else {
            panic!("expected products");
        };
        assert_eq!(cards.len(), 5);
        let hearts: Vec<bool> = cards.iter().map(|card| card.in_wishlist).collect();
        assert_eq!(hearts, vec![false, true, false, false, false]);

        shop.set_category(CategoryFilter::parse("B").unwrap());
        shop.search("lamp");
        assert_eq!(ProductGrid::for_shop(&shop), ProductGrid::Empty);
    }

    #[test]
    fn test_wishlist_view() {
        let mut shop = ShopState::load(Storage::in_memory(), catalog(), ShopSettings::default());
        shop.toggle_wishlist(ProductId::new(3));
        shop.toggle_wishlist(ProductId::new(1));

        let view = WishlistView::from_entries(shop.wishlist().entries());
        assert_eq!(view.title(), "My Wishlist (2)");
        let names: Vec<&str> = view.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Desk", "Lamp"]);
        assert_eq!(view.items[0].original_price, "₹400");
    }
}
