//! Customer order history.

use wighub_core::{Email, Order, OrderId};
use wighub_store::repo::{OrderRepository, or_empty};
use wighub_store::{KeyValueStore, RepositoryError};

/// Read access to a customer's orders.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            orders: OrderRepository::new(store),
        }
    }

    /// Orders of `owner`, newest first. An unreadable history shows as empty.
    #[must_use]
    pub fn orders(&self, owner: &Email) -> Vec<Order> {
        or_empty(self.orders.load(owner), "orders")
    }

    /// A single order of `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the history cannot be read.
    pub fn order(&self, owner: &Email, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        Ok(self.orders.load(owner)?.into_iter().find(|order| order.id == id))
    }
}
