//! Dashboard figures on the command line.

use std::io::Write;

use tracing::info;

use wighub_admin::AdminConfig;
use wighub_admin::services::{DashboardService, DashboardStats};
use wighub_store::KeyValueStore;

use super::CommandError;

/// Aggregate the dashboard figures.
#[must_use]
pub fn collect(store: &dyn KeyValueStore, config: &AdminConfig) -> DashboardStats {
    DashboardService::new(store).stats(config.low_stock_threshold)
}

/// Log the figures, formatting money in the configured currency.
pub fn log(stats: &DashboardStats, config: &AdminConfig) {
    let money = |amount| config.pricing.price(amount).display();

    info!("Products: {}", stats.total_products);
    info!("Stock value: {}", money(stats.stock_value));
    info!("Orders: {}", stats.total_orders);
    info!("Total sales: {}", money(stats.total_sales));
    info!("Clients: {}", stats.total_clients);

    for order in &stats.recent_orders {
        info!(
            "  {} {} {} ({})",
            order.id.reference(),
            order.customer.username,
            money(order.total),
            order.status.label()
        );
    }
    if !stats.low_stock.is_empty() {
        info!("Low stock (<= {}):", config.low_stock_threshold);
        for product in &stats.low_stock {
            info!("  {} - {} left", product.name, product.stock);
        }
    }
}

/// Write the figures as pretty JSON.
///
/// # Errors
///
/// Returns `CommandError::Json` / `CommandError::Io` if encoding or writing fails.
pub fn write_json(stats: &DashboardStats, out: &mut impl Write) -> Result<(), CommandError> {
    serde_json::to_writer_pretty(&mut *out, stats)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use wighub_core::{Product, ProductId};
    use wighub_store::MemoryStore;
    use wighub_store::repo::ProductRepository;

    use super::*;

    #[test]
    fn test_json_output() {
        let store = MemoryStore::new();
        ProductRepository::new(&store)
            .save(&[Product {
                id: ProductId::new(1),
                name: "Body Wave".to_owned(),
                category: "Human Hair".to_owned(),
                product_type: "Lace Front".to_owned(),
                price: Decimal::new(8999, 2),
                stock: 2,
                description: String::new(),
                active: true,
                image: None,
            }])
            .unwrap();

        let stats = collect(&store, &AdminConfig::default());
        let mut out = Vec::new();
        write_json(&stats, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["totalProducts"], 1);
        assert_eq!(value["stockValue"], "179.98");
        assert_eq!(value["lowStock"][0]["name"], "Body Wave");
    }
}
