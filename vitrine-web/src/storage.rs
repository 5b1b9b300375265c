//! `localStorage`-backed preference store

use vitrine_core::PreferenceStore;

use crate::dom;

/// Reads and writes plain string values in the browser's `localStorage`.
/// The storage handle is resolved on every call so a store that appears or
/// disappears mid-session (private mode, quota policies) is handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PreferenceStore for LocalStorageStore {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage()
            .map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))?;
        storage
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage()
            .map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))?;
        storage
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}
