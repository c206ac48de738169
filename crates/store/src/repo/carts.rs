//! Per-account cart repository.

use wighub_core::{CartLine, Email};

use super::{RepositoryError, read_collection, write_json};
use crate::backend::KeyValueStore;
use crate::keys;

/// Repository for `cart_<email>` documents.
pub struct CartRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the cart owned by `owner`; a missing cart is empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the cart does not decode.
    pub fn load(&self, owner: &Email) -> Result<Vec<CartLine>, RepositoryError> {
        read_collection(self.store, &keys::cart(owner))
    }

    /// Replace the cart owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save(&self, owner: &Email, lines: &[CartLine]) -> Result<(), RepositoryError> {
        write_json(self.store, &keys::cart(owner), lines)
    }

    /// Empty the cart owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn clear(&self, owner: &Email) -> Result<(), RepositoryError> {
        self.save(owner, &[])
    }
}
