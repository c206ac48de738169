//! Order management across all clients.

use tracing::{info, instrument};

use wighub_core::{Order, OrderId, OrderStatus};
use wighub_store::KeyValueStore;
use wighub_store::repo::{AccountRepository, OrderRepository, or_empty};

use super::AdminError;

/// Order management service.
pub struct OrderAdminService<'a> {
    accounts: AccountRepository<'a>,
    orders: OrderRepository<'a>,
}

impl<'a> OrderAdminService<'a> {
    /// Create a new order management service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            accounts: AccountRepository::new(store),
            orders: OrderRepository::new(store),
        }
    }

    /// Every client's orders, newest first.
    ///
    /// Unreadable histories are skipped with a warning.
    #[must_use]
    pub fn all_orders(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = or_empty(self.accounts.load(), "clients")
            .iter()
            .flat_map(|account| or_empty(self.orders.load(&account.email), "orders"))
            .collect();
        orders.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        orders
    }

    /// Move an order to `status`.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::OrderNotFound` if no client has the order.
    /// Returns `AdminError::InvalidTransition` if `status` is behind the current one.
    #[instrument(skip(self))]
    pub fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, AdminError> {
        for account in self.accounts.load()? {
            let mut orders = self.orders.load(&account.email)?;
            let Some(order) = orders.iter_mut().find(|order| order.id == id) else {
                continue;
            };

            if !order.status.can_transition_to(status) {
                return Err(AdminError::InvalidTransition {
                    from: order.status,
                    to: status,
                });
            }
            let from = order.status;
            order.status = status;
            let order = order.clone();
            self.orders.save(&account.email, &orders)?;

            info!(order = %id.reference(), %from, to = %status, "Order status updated");
            return Ok(order);
        }
        Err(AdminError::OrderNotFound(id))
    }
}
