//! Dashboard aggregates.
//!
//! Everything is recomputed from the store on each call; there are no
//! persisted counters.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use wighub_core::{Order, Product};
use wighub_store::KeyValueStore;
use wighub_store::repo::{AccountRepository, ProductRepository, or_empty};

use super::orders::OrderAdminService;

/// Number of orders shown in the recent orders list.
const RECENT_ORDERS: usize = 5;

/// Store-wide figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    /// Σ price × stock over all products
    pub stock_value: Decimal,
    pub total_orders: usize,
    /// Σ order total over all orders
    pub total_sales: Decimal,
    pub total_clients: usize,
    /// Newest orders first
    pub recent_orders: Vec<Order>,
    /// Products at or below the low stock threshold, lowest first
    pub low_stock: Vec<Product>,
}

/// Dashboard service.
pub struct DashboardService<'a> {
    products: ProductRepository<'a>,
    accounts: AccountRepository<'a>,
    orders: OrderAdminService<'a>,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            products: ProductRepository::new(store),
            accounts: AccountRepository::new(store),
            orders: OrderAdminService::new(store),
        }
    }

    /// Aggregate the dashboard figures. Unreadable collections count as empty.
    #[must_use]
    #[instrument(skip(self))]
    pub fn stats(&self, low_stock_threshold: u32) -> DashboardStats {
        let products = or_empty(self.products.load(), "products");
        let total_clients = or_empty(self.accounts.load(), "clients").len();
        let mut orders = self.orders.all_orders();

        let mut low_stock: Vec<Product> = products
            .iter()
            .filter(|product| product.stock <= low_stock_threshold)
            .cloned()
            .collect();
        low_stock.sort_by_key(|product| product.stock);

        let total_orders = orders.len();
        let total_sales = orders.iter().map(|order| order.total).sum();
        orders.truncate(RECENT_ORDERS);

        DashboardStats {
            total_products: products.len(),
            stock_value: products.iter().map(Product::stock_value).sum(),
            total_orders,
            total_sales,
            total_clients,
            recent_orders: orders,
            low_stock,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wighub_core::ProductId;
    use wighub_store::MemoryStore;
    use wighub_store::repo::OrderRepository;

    use super::super::orders::tests::{client, order};
    use super::*;

    fn product(id: i64, price: Decimal, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Wig {id}"),
            category: "Human Hair".to_owned(),
            product_type: "Closure".to_owned(),
            price,
            stock,
            description: String::new(),
            active: id != 3,
            image: None,
        }
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        let stats = DashboardService::new(&store).stats(5);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.stock_value, Decimal::ZERO);
        assert_eq!(stats.total_sales, Decimal::ZERO);
        assert!(stats.recent_orders.is_empty());
    }

    #[test]
    fn test_stats_aggregate_everything() {
        let store = MemoryStore::new();
        ProductRepository::new(&store)
            .save(&[
                product(1, Decimal::new(8999, 2), 15),
                product(2, Decimal::from(20), 2),
                product(3, Decimal::from(5), 0),
            ])
            .unwrap();

        let alice = client(0, "alice");
        let bob = client(1, "bob123");
        AccountRepository::new(&store)
            .save(&[alice.clone(), bob.clone()])
            .unwrap();
        let history: Vec<Order> = (1..=4)
            .map(|i| order(i, &alice, Decimal::from(10), 100 - i))
            .collect();
        let orders = OrderRepository::new(&store);
        orders.save(&alice.email, &history).unwrap();
        orders
            .save(&bob.email, &[order(9, &bob, Decimal::new(5050, 2), 0), order(8, &bob, Decimal::ONE, 200)])
            .unwrap();

        let stats = DashboardService::new(&store).stats(5);

        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.stock_value, Decimal::new(138_985, 2));
        assert_eq!(stats.total_orders, 6);
        assert_eq!(stats.total_sales, Decimal::new(9150, 2));
        assert_eq!(stats.total_clients, 2);

        let recent: Vec<_> = stats.recent_orders.iter().map(|o| o.id.as_i64()).collect();
        assert_eq!(recent, vec![9, 4, 3, 2, 1]);

        let low: Vec<_> = stats.low_stock.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(low, vec![3, 2]);
    }
}
