//! Per-account order history repository.

use wighub_core::{Email, Order};

use super::{RepositoryError, read_collection, write_json};
use crate::backend::KeyValueStore;
use crate::keys;

/// Repository for `orders_<email>` documents, newest order first.
pub struct OrderRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the order history of `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the history does not decode.
    pub fn load(&self, owner: &Email) -> Result<Vec<Order>, RepositoryError> {
        read_collection(self.store, &keys::orders(owner))
    }

    /// Replace the order history of `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save(&self, owner: &Email, orders: &[Order]) -> Result<(), RepositoryError> {
        write_json(self.store, &keys::orders(owner), orders)
    }

    /// Insert `order` at the front of the history of `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the history cannot be read or written.
    pub fn prepend(&self, owner: &Email, order: Order) -> Result<(), RepositoryError> {
        let mut orders = self.load(owner)?;
        orders.insert(0, order);
        self.save(owner, &orders)
    }
}
