//! Preference persistence.
//!
//! DESIGN
//! ======
//! The controller only sees [`PreferenceStore`]. The browser backend lives in
//! `dom::LocalStore`; [`FallbackStore`] wraps it so a disabled or full
//! `localStorage` downgrades to a session-only preference instead of failing.

use std::collections::HashMap;

use crate::error::StorageError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// String key-value store scoped to the page origin.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Lives as long as the page.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Primary store with a session-only in-memory fallback.
///
/// The first failure of the primary is logged and the primary is dropped;
/// from then on every read and write goes to memory. Values successfully
/// written before the failure are mirrored so the session keeps them.
#[derive(Debug)]
pub struct FallbackStore<P> {
    primary: Option<P>,
    memory: MemoryStore,
}

impl<P: PreferenceStore> FallbackStore<P> {
    /// Wrap a working primary store.
    pub fn new(primary: P) -> Self {
        Self { primary: Some(primary), memory: MemoryStore::new() }
    }

    /// Start in memory-only mode, e.g. when the primary could not be opened.
    #[must_use]
    pub fn memory_only() -> Self {
        Self { primary: None, memory: MemoryStore::new() }
    }

    /// Whether reads and writes still reach the primary store.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.primary.is_some()
    }

    fn degrade(&mut self, err: &StorageError) {
        log::warn!("store: {err}; keeping theme preference for this session only");
        self.primary = None;
    }
}

impl<P: PreferenceStore> PreferenceStore for FallbackStore<P> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(primary) = &self.primary else {
            return self.memory.load(key);
        };
        match primary.load(key) {
            Ok(value) => Ok(value),
            Err(err) => {
                // Reads cannot drop the primary through `&self`; the next
                // save will surface the same failure and degrade.
                log::warn!("store: {err}; treating preference as unset");
                self.memory.load(key)
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.memory.save(key, value)?;
        let Some(primary) = self.primary.as_mut() else {
            return Ok(());
        };
        if let Err(err) = primary.save(key, value) {
            self.degrade(&err);
        }
        Ok(())
    }
}
