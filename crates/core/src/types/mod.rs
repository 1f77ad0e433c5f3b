//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod category;
pub mod id;
pub mod price;
pub mod product;
pub mod query;
pub mod status;

pub use cart::{BuyNowItem, CartLine, WishlistEntry};
pub use category::{Category, CategoryError, CategoryFilter};
pub use id::*;
pub use price::{Price, PriceError};
pub use product::Product;
pub use query::SortKey;
pub use status::*;
