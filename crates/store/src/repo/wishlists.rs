//! Per-account wishlist repository.

use wighub_core::{Email, ProductSnapshot};

use super::{RepositoryError, read_collection, write_json};
use crate::backend::KeyValueStore;
use crate::keys;

/// Repository for `wishlist_<email>` documents.
pub struct WishlistRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> WishlistRepository<'a> {
    /// Create a new wishlist repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the wishlist owned by `owner`; a missing wishlist is empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the wishlist does not decode.
    pub fn load(&self, owner: &Email) -> Result<Vec<ProductSnapshot>, RepositoryError> {
        read_collection(self.store, &keys::wishlist(owner))
    }

    /// Replace the wishlist owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save(&self, owner: &Email, items: &[ProductSnapshot]) -> Result<(), RepositoryError> {
        write_json(self.store, &keys::wishlist(owner), items)
    }
}
