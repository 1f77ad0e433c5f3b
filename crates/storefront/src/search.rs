//! Product grid query: category filter, free-text search and sort.
//!
//! [`query`] is a pure function of the catalog and the three grid controls.
//! Filters run first (category, then search term) and the sort is applied
//! to what is left. Sorting is stable, so ties keep catalog order, and
//! [`SortKey::Default`] skips sorting altogether.

use feruca::Collator;
use shopfront_core::{CategoryFilter, Product, SortKey};

use crate::catalog::Catalog;

/// Current state of the grid controls. Not persisted; starts unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortKey,
}

impl QueryState {
    /// Products to show for the current controls.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        query(catalog.products(), &self.category, &self.search, self.sort)
    }
}

/// Filter and order `products` for display.
#[must_use]
pub fn query<'a>(
    products: &'a [Product],
    category: &CategoryFilter,
    search: &str,
    sort: SortKey,
) -> Vec<&'a Product> {
    let needle = search.trim().to_lowercase();
    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|product| category.matches(&product.category))
        .filter(|product| matches_term(product, &needle))
        .collect();
    sort_products(&mut visible, sort);
    visible
}

/// Whether `needle` (already trimmed and lower-cased) occurs in the
/// product's name, description, category or badge. An empty needle matches
/// everything.
#[must_use]
pub fn matches_term(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || [
            product.name.as_str(),
            product.description.as_str(),
            product.category.as_str(),
            product.badge.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Stable in-place sort by `key`.
///
/// Names are ordered by the Unicode Collation Algorithm with the CLDR root
/// locale, so accents and case are secondary to the base letter.
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::NameAsc => {
            let mut collator = Collator::default();
            products.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
        SortKey::NameDesc => {
            let mut collator = Collator::default();
            products.sort_by(|a, b| collator.collate(b.name.as_str(), a.name.as_str()));
        }
    }
}
