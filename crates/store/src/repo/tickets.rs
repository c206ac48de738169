//! Support ticket repository.

use wighub_core::Ticket;

use super::{RepositoryError, read_collection, write_json};
use crate::backend::KeyValueStore;
use crate::keys;

/// Repository for the shared support ticket collection.
pub struct TicketRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> TicketRepository<'a> {
    /// Create a new ticket repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load every ticket in submission order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the collection does not decode.
    pub fn load(&self) -> Result<Vec<Ticket>, RepositoryError> {
        read_collection(self.store, keys::SUPPORT_TICKETS)
    }

    /// Replace the ticket collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save(&self, tickets: &[Ticket]) -> Result<(), RepositoryError> {
        write_json(self.store, keys::SUPPORT_TICKETS, tickets)
    }
}
