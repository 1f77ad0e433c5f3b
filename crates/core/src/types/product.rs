//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};

/// A purchasable product as listed in the catalog.
///
/// Serialized with the camelCase field names the shop pages share
/// (`originalPrice`), so snapshots written to storage can be read back by
/// the product detail and checkout pages unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within the catalog.
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Current selling price.
    pub price: Price,
    /// Pre-discount price, shown struck through.
    pub original_price: Price,
    /// Discount percentage (e.g. `40` for "40% OFF").
    pub discount: u8,
    /// Average rating on a 0-5 scale.
    pub rating: f64,
    /// Promotional label such as "Bestseller".
    pub badge: String,
    pub description: String,
    /// Image reference; markup or a URL, rendered as-is.
    pub image: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_camel_case() {
        let json = r#"{"id":1,"name":"Watch","category":"accessories","price":1999,
            "originalPrice":2999,"discount":33,"rating":4.5,"badge":"New",
            "description":"Steel strap","image":"⌚"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.original_price, Price::from_whole(2999));

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["originalPrice"], 2999);
        assert!(value.get("original_price").is_none());
    }
}
