//! In-memory store backend.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Keys currently present, in sorted order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the lock is poisoned.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_owned())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("products").unwrap(), None);

        store.set("products", "[]").unwrap();
        assert_eq!(store.get("products").unwrap().as_deref(), Some("[]"));

        store.set("products", "[1]").unwrap();
        assert_eq!(store.get("products").unwrap().as_deref(), Some("[1]"));

        store.remove("products").unwrap();
        store.remove("products").unwrap();
        assert_eq!(store.get("products").unwrap(), None);
    }

    #[test]
    fn test_with_entries_and_keys() {
        let store = MemoryStore::with_entries([("b", "2"), ("a", "1")]);
        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);
    }
}
