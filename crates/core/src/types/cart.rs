//! Cart lines, wishlist entries and the buy-now hand-off snapshot.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// One product's entry in the cart.
///
/// Name, price and image are copied from the catalog when the line is
/// created and are not refreshed afterwards. Quantity can never be zero;
/// stored lines without a quantity are read as quantity 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    #[serde(default = "one")]
    pub quantity: NonZeroU32,
}

const fn one() -> NonZeroU32 {
    NonZeroU32::MIN
}

impl CartLine {
    /// A new line for `product` with quantity 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: one(),
        }
    }

    /// Quantity as a plain integer.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity())
    }
}

/// A saved-for-later product: the full catalog record at the time it was
/// added, stored as the bare product object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WishlistEntry(Product);

impl WishlistEntry {
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.0.id
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.0
    }
}

impl From<Product> for WishlistEntry {
    fn from(product: Product) -> Self {
        Self(product)
    }
}

/// Single-item order handed to the checkout page by "Buy Now".
///
/// Stored as the product object with an extra `quantity` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyNowItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl From<Product> for BuyNowItem {
    fn from(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Category;

    fn product() -> Product {
        Product {
            id: ProductId::new(3),
            name: "Headphones".to_string(),
            category: Category::parse("electronics").unwrap(),
            price: Price::from_whole(1499),
            original_price: Price::from_whole(2499),
            discount: 40,
            rating: 4.2,
            badge: "Hot".to_string(),
            description: "Wireless over-ear".to_string(),
            image: "🎧".to_string(),
        }
    }

    #[test]
    fn test_cart_line_wire_shape() {
        let line = CartLine::from_product(&product());
        assert_eq!(
            serde_json::to_string(&line).unwrap(),
            r#"{"id":3,"name":"Headphones","price":1499,"image":"🎧","quantity":1}"#
        );
    }

    #[test]
    fn test_missing_quantity_reads_as_one() {
        let line: CartLine =
            serde_json::from_str(r#"{"id":3,"name":"Headphones","price":1499,"image":"🎧"}"#)
                .unwrap();
        assert_eq!(line.quantity(), 1);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let result = serde_json::from_str::<CartLine>(
            r#"{"id":3,"name":"Headphones","price":1499,"image":"🎧","quantity":0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::from_product(&product());
        line.quantity = NonZeroU32::new(3).unwrap();
        assert_eq!(line.line_total(), Price::from_whole(4497));
    }

    #[test]
    fn test_wishlist_entry_is_bare_product() {
        let entry = WishlistEntry::from(product());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, serde_json::to_value(product()).unwrap());
    }

    #[test]
    fn test_buy_now_item_flattens_product() {
        let item = BuyNowItem::from(product());
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["originalPrice"], 2499);
        let back: BuyNowItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }
}
