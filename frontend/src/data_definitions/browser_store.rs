//! `localStorage`-backed key/value store.

use common::key_value_store::{KeyValueStore, MemoryStore, StorageError};

/// Writes through to the browser's local storage. Where there is none (server
/// rendering, desktop webview) values only live in memory for the session.
#[derive(Debug, Clone, Default)]
pub struct BrowserStore {
    fallback: MemoryStore,
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match local_storage() {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => self.fallback.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match local_storage() {
            Some(storage) => storage.set_item(key, value).map_err(|e| storage_error(key, e)),
            None => self.fallback.set(key, value),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

fn storage_error(key: &str, e: wasm_bindgen::JsValue) -> StorageError {
    StorageError {
        key: key.to_string(),
        reason: e.as_string().unwrap_or_else(|| format!("{e:?}")),
    }
}
