//! Key-value persistence behind the cart and wishlist.
//!
//! Two stores back every page:
//!
//! - **durable** - survives reloads (`localStorage` in the browser, a data
//!   directory for the CLI)
//! - **ephemeral** - survives a single navigation and is used to hand data to
//!   the next page (`sessionStorage` in the browser, process memory for the CLI)
//!
//! Values are strings; structured values are JSON. All access is
//! synchronous and a successful `set` is visible to the next `get`.

mod file;
mod memory;

#[cfg(feature = "browser")]
mod browser;

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::keys;

#[cfg(feature = "browser")]
pub use browser::BrowserStore;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt value under key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// A synchronous string key-value store.
///
/// Methods take `&self`; implementations use interior mutability. Stores
/// are single-threaded, so no `Send`/`Sync` bound is required and a browser
/// storage handle can implement this trait directly.
pub trait KeyValueStore: fmt::Debug {
    /// Retrieve a value by key. Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value. Succeeds even if the key did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl dyn KeyValueStore + '_ {
    /// Read and deserialize a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored value does not match `T`,
    /// or the backend error if the read fails.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Serialize a value as JSON and store it.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &raw)?;
        tracing::debug!(key, bytes = raw.len(), "Persisted value");
        Ok(())
    }

    /// Load a stored JSON list, treating a missing or unreadable value as empty.
    ///
    /// Corrupt data is logged and discarded; it is overwritten by the next save.
    pub fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.read_json::<Vec<T>>(key) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e @ StoreError::Corrupt { .. }) => {
                tracing::warn!(key, error = %e, "Discarding malformed stored list");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to read stored list");
                Vec::new()
            }
        }
    }
}

/// The durable and ephemeral stores of one page.
///
/// Cheaply cloneable; clones share the same backends.
#[derive(Clone)]
pub struct Storage {
    inner: Rc<StorageInner>,
}

struct StorageInner {
    durable: Box<dyn KeyValueStore>,
    ephemeral: Box<dyn KeyValueStore>,
}

impl Storage {
    /// Combine a durable and an ephemeral backend.
    #[must_use]
    pub fn new(
        durable: impl KeyValueStore + 'static,
        ephemeral: impl KeyValueStore + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(StorageInner {
                durable: Box::new(durable),
                ephemeral: Box::new(ephemeral),
            }),
        }
    }

    /// Both stores in memory. Nothing outlives the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), MemoryStore::new())
    }

    /// Reload-surviving store.
    #[must_use]
    pub fn durable(&self) -> &dyn KeyValueStore {
        self.inner.durable.as_ref()
    }

    /// Navigation hand-off store.
    #[must_use]
    pub fn ephemeral(&self) -> &dyn KeyValueStore {
        self.inner.ephemeral.as_ref()
    }

    /// Read the login flag owned by the auth pages.
    ///
    /// # Errors
    ///
    /// Returns an error if durable storage cannot be read.
    pub fn is_logged_in(&self) -> Result<bool, StoreError> {
        Ok(self.durable().get(keys::durable::IS_LOGGED_IN)?.as_deref() == Some(keys::LOGGED_IN))
    }

    /// Write the login flag, as the auth pages do after sign-in or sign-out.
    ///
    /// # Errors
    ///
    /// Returns an error if durable storage cannot be written.
    pub fn set_logged_in(&self, logged_in: bool) -> Result<(), StoreError> {
        let value = if logged_in { keys::LOGGED_IN } else { "false" };
        self.durable().set(keys::durable::IS_LOGGED_IN, value)
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("durable", &self.inner.durable)
            .field("ephemeral", &self.inner.ephemeral)
            .finish()
    }
}
