//! Shopfront Core - Shared types library.
//!
//! This crate provides common types used across all Shopfront components:
//! - `storefront` - Cart, wishlist and catalog query state for the shop page
//! - `cli` - Command-line driver over a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere, including in the browser.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, catalog records, cart lines, wishlist
//!   entries, query keys and UI statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
