//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Login gate, quantities, checkout and buy-now hand-off
//! - `wishlist_flow` - Toggling, removing and moving to the cart
//! - `query` - Filter, search and sort over the bundled catalog
//! - `persistence` - On-disk format and recovery from stored data
//!
//! Every test works against real files in a temporary directory, so what is
//! asserted is what another page would read back.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use shopfront_storefront::catalog::Catalog;
use shopfront_storefront::config::ShopSettings;
use shopfront_storefront::state::ShopState;
use shopfront_storefront::store::{FileStore, Storage};
use tempfile::TempDir;

/// A browser profile on disk: durable storage plus one tab's session
/// storage, each in its own directory.
pub struct TestContext {
    root: TempDir,
    pub settings: ShopSettings,
}

impl TestContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            settings: ShopSettings::default(),
        }
    }

    /// Durable storage directory.
    #[must_use]
    pub fn local_dir(&self) -> PathBuf {
        self.root.path().join("local")
    }

    /// Session storage directory.
    #[must_use]
    pub fn session_dir(&self) -> PathBuf {
        self.root.path().join("session")
    }

    /// Fresh handles on the same files.
    #[must_use]
    pub fn storage(&self) -> Storage {
        Storage::new(
            FileStore::new(self.local_dir()),
            FileStore::new(self.session_dir()),
        )
    }

    /// Load a page over the bundled catalog. Calling it again is a reload.
    #[must_use]
    pub fn open_page(&self) -> ShopState {
        ShopState::load(
            self.storage(),
            Catalog::bundled().expect("Bundled catalog is valid"),
            self.settings,
        )
    }

    /// Close the tab: session storage is gone, durable storage stays.
    pub fn close_tab(&self) {
        let _ = fs::remove_dir_all(self.session_dir());
    }

    /// Set the login flag as the auth pages would.
    pub fn log_in(&self) {
        self.storage()
            .set_logged_in(true)
            .expect("Failed to write login flag");
    }

    /// Raw durable value, parsed as JSON.
    #[must_use]
    pub fn local_json(&self, key: &str) -> Option<Value> {
        read_json_file(self.local_dir().join(format!("{key}.json")))
    }

    /// Raw session value, parsed as JSON.
    #[must_use]
    pub fn session_json(&self, key: &str) -> Option<Value> {
        read_json_file(self.session_dir().join(format!("{key}.json")))
    }

    /// Write a raw durable value, bypassing the shop.
    pub fn write_local_raw(&self, key: &str, contents: &str) {
        fs::create_dir_all(self.local_dir()).expect("Failed to create local dir");
        fs::write(self.local_dir().join(format!("{key}.json")), contents)
            .expect("Failed to write value");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

fn read_json_file(path: PathBuf) -> Option<Value> {
    let text = fs::read_to_string(path).ok()?;
    Some(serde_json::from_str(&text).expect("Stored value is valid JSON"))
}
