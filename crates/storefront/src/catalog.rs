//! The static product catalog.
//!
//! The catalog is an input: it is loaded once (from the bundled
//! `catalog/products.json` or a file named in the configuration) and never
//! mutated afterwards.

use std::path::Path;
use std::rc::Rc;

use shopfront_core::{Category, Product, ProductId};

/// Catalog shipped with the crate.
const BUNDLED_CATALOG: &str = include_str!("../catalog/products.json");

/// Errors loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}

/// Ordered, read-only list of products.
///
/// Cheaply cloneable; clones share the same product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Rc<[Product]>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        for (index, product) in products.iter().enumerate() {
            if products
                .iter()
                .take(index)
                .any(|earlier| earlier.id == product.id)
            {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self {
            products: products.into(),
        })
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ids repeat.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Read a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen: Vec<&Category> = Vec::new();
        for product in self.products.iter() {
            if !seen.contains(&&product.category) {
                seen.push(&product.category);
            }
        }
        seen
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
