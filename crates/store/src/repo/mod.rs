//! Typed repositories over the key-value store.
//!
//! Repositories are thin: they decode and encode whole JSON collections and
//! leave every business rule to the services. Decoding is strict. A document
//! that does not match its record type is reported as
//! [`RepositoryError::DataCorruption`], and only top-level view calls recover
//! from it, via [`or_empty`].

pub mod accounts;
pub mod carts;
pub mod orders;
pub mod products;
pub mod sequence;
pub mod sessions;
pub mod tickets;
pub mod wishlists;

pub use accounts::{AccountRepository, AdminRepository, next_account_id, next_admin_id};
pub use carts::CartRepository;
pub use orders::OrderRepository;
pub use products::{ProductRepository, next_product_id};
pub use sequence::OrderSequence;
pub use sessions::SessionRepository;
pub use tickets::TicketRepository;
pub use wishlists::WishlistRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::backend::{KeyValueStore, StoreError};

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backend failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Stored data does not decode into the expected record type.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// A record could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Decode the document under `key`, or `None` when the key is absent.
pub(crate) fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, RepositoryError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| RepositoryError::DataCorruption(format!("{key}: {e}")))
}

/// Encode `value` and write it under `key`.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), RepositoryError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| RepositoryError::Serialization(format!("{key}: {e}")))?;
    store.set(key, &raw)?;
    debug!(key, bytes = raw.len(), "Wrote store document");
    Ok(())
}

/// Decode a collection, treating an absent key as empty.
pub(crate) fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, RepositoryError> {
    Ok(read_json(store, key)?.unwrap_or_default())
}

/// Recover a failed collection load as an empty collection.
///
/// Meant for the outermost read of a view (catalog listing, cart page, order
/// history). Mutating paths must propagate the error instead, otherwise the
/// next write would replace the corrupt document with an empty one.
#[must_use]
pub fn or_empty<T>(result: Result<Vec<T>, RepositoryError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(error = %e, collection = what, "Recovering unreadable collection as empty");
        Vec::new()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;

    #[test]
    fn test_absent_collection_is_empty() {
        let store = MemoryStore::new();
        let items: Vec<u32> = read_collection(&store, "nothing").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_malformed_json_is_data_corruption() {
        let store = MemoryStore::with_entries([("products", "{not json")]);
        let result: Result<Vec<u32>, _> = read_collection(&store, "products");
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_or_empty_recovers() {
        let store = MemoryStore::with_entries([("products", "[\"wrong type\"]")]);
        let items: Vec<u32> = or_empty(read_collection(&store, "products"), "products");
        assert!(items.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        write_json(&store, "numbers", &[1_u32, 2, 3]).unwrap();
        assert_eq!(store.get("numbers").unwrap().as_deref(), Some("[1,2,3]"));
        let items: Vec<u32> = read_collection(&store, "numbers").unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }
}
