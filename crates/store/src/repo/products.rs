//! Product catalog repository.

use wighub_core::{Product, ProductId};

use super::{RepositoryError, read_collection, write_json};
use crate::backend::KeyValueStore;
use crate::keys;

/// Repository for the shared product collection.
pub struct ProductRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load every product in stored order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the collection does not decode.
    pub fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        read_collection(self.store, keys::PRODUCTS)
    }

    /// Replace the product collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save(&self, products: &[Product]) -> Result<(), RepositoryError> {
        write_json(self.store, keys::PRODUCTS, products)
    }

    /// Find a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the collection does not decode.
    pub fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }
}

/// Next sequential product ID: max existing + 1, or 1 for an empty catalog.
#[must_use]
pub fn next_product_id(products: &[Product]) -> ProductId {
    products
        .iter()
        .map(|p| p.id)
        .max()
        .map_or(ProductId::new(1), |id| id.next())
}
