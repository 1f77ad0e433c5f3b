//! Shopfront Storefront library.
//!
//! Client-side state for the shop page: the cart and wishlist kept in
//! durable key-value storage, the product grid query (category, search,
//! sort), the category carousel and the notification/navigation events a
//! renderer consumes.
//!
//! [`state::ShopState`] is the single entry point a page wires its event
//! handlers to. Everything below it is synchronous and runs to completion.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod search;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod views;
pub mod wishlist;

#[cfg(test)]
mod testing;
