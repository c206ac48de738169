//! Checkout: turns a cart into an order.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{info, instrument, warn};

use wighub_core::{CustomerSnapshot, Order, OrderStatus, ProductId, SessionUser, ShippingDetails};

use super::{CartError, CartService, compute_totals};

impl CartService<'_> {
    /// Place an order for everything in the customer's cart.
    ///
    /// Stock is re-checked against the live catalog. On success the order is
    /// prepended to the customer's history with status `processing`, stock is
    /// decremented and the cart is emptied.
    ///
    /// # Errors
    ///
    /// Returns `CartError::MissingShippingDetails` if a required field is blank.
    /// Returns `CartError::EmptyCart` if there is nothing to order.
    /// Returns `CartError::StockChanged` if a line now exceeds available stock.
    /// Returns `CartError::Repository` if the cart, catalog or order history
    /// cannot be read. Nothing is written in any of these cases.
    #[instrument(skip(self, customer, details), fields(customer = %customer.email))]
    pub fn checkout(
        &self,
        customer: &SessionUser,
        details: ShippingDetails,
    ) -> Result<Order, CartError> {
        let missing = details.missing_fields();
        if !missing.is_empty() {
            return Err(CartError::MissingShippingDetails(missing));
        }

        let owner = &customer.email;
        let lines = self.carts.load(owner)?;
        if lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let mut requested: BTreeMap<ProductId, u32> = BTreeMap::new();
        for line in &lines {
            let quantity = requested.entry(line.id).or_default();
            *quantity = quantity.saturating_add(line.quantity);
        }

        let mut products = self.products.load()?;
        for line in &lines {
            let Some(&quantity) = requested.get(&line.id) else {
                continue;
            };
            let available = products
                .iter()
                .find(|product| product.id == line.id)
                .map_or(0, |product| product.stock);
            if available < quantity {
                warn!(product_id = %line.id, available, requested = quantity, "Checkout rejected: stock changed");
                return Err(CartError::StockChanged {
                    name: line.name.clone(),
                    available,
                    requested: quantity,
                });
            }
        }

        let mut history = self.orders.load(owner)?;
        for product in &mut products {
            if let Some(&quantity) = requested.get(&product.id) {
                product.stock = product.stock.saturating_sub(quantity);
            }
        }

        let totals = compute_totals(&lines, self.pricing);
        let now = Utc::now();
        let order = Order {
            id: self.sequence.next_id(now)?,
            items: lines,
            subtotal: totals.subtotal,
            tax: totals.tax,
            shipping: totals.shipping,
            total: totals.total,
            status: OrderStatus::Processing,
            date: now,
            customer: CustomerSnapshot {
                id: customer.id,
                username: customer.username.clone(),
                email: customer.email.clone(),
            },
            shipping_details: details,
        };

        history.insert(0, order.clone());
        self.products.save(&products)?;
        self.orders.save(owner, &history)?;
        self.carts.clear(owner)?;

        info!(
            order = %order.id.reference(),
            total = %order.total,
            items = order.item_count(),
            "Order placed"
        );
        Ok(order)
    }
}
