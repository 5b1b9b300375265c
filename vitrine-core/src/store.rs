//! Persistent preference storage
use std::collections::BTreeMap;
use thiserror::Error;

/// Key-value storage for user preferences.
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a stored preference
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Persist a preference
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryStoreError {
    #[error("preference store is unavailable")]
    Unavailable,
}

/// In-process store for native hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read and write fails, like a browser with storage disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            entries: BTreeMap::new(),
            unavailable: true,
        }
    }

    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    type Error = MemoryStoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.unavailable {
            return Err(MemoryStoreError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.unavailable {
            return Err(MemoryStoreError::Unavailable);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
