//! `window.localStorage` / `window.sessionStorage` backends.

use wasm_bindgen::JsValue;

use super::{KeyValueStore, StoreError};

/// A store backed by the browser's Web Storage API.
#[derive(Debug, Clone)]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

fn backend_error(e: &JsValue) -> StoreError {
    StoreError::Backend(format!("{e:?}"))
}

impl BrowserStore {
    /// `window.localStorage`, the durable store.
    ///
    /// # Errors
    ///
    /// Returns an error outside a browser window or when storage is disabled.
    pub fn local() -> Result<Self, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Backend("no global window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| backend_error(&e))?
            .ok_or_else(|| StoreError::Backend("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }

    /// `window.sessionStorage`, the ephemeral store.
    ///
    /// # Errors
    ///
    /// Returns an error outside a browser window or when storage is disabled.
    pub fn session() -> Result<Self, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Backend("no global window".to_string()))?;
        let storage = window
            .session_storage()
            .map_err(|e| backend_error(&e))?
            .ok_or_else(|| StoreError::Backend("sessionStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|e| backend_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| backend_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| backend_error(&e))
    }
}
