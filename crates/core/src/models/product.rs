//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

const fn default_active() -> bool {
    true
}

/// A catalog product.
///
/// `active` controls storefront visibility. Documents without the field are
/// treated as active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub product_type: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Whether the product has any units left.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Inventory value of this product (price × stock).
    #[must_use]
    pub fn stock_value(&self) -> Decimal {
        self.price * Decimal::from(self.stock)
    }

    /// Copy of the fields shown in carts, wishlists and orders.
    #[must_use]
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            product_type: self.product_type.clone(),
            price: self.price,
            description: self.description.clone(),
            image: self.image.clone(),
        }
    }
}

/// A copy of a product's fields taken at add-to-wishlist time.
///
/// Snapshots are never refreshed from the catalog; price changes after the
/// snapshot was taken do not show up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub product_type: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_active_defaults_to_true() {
        let json = r#"{
            "id": 1,
            "name": "Brazilian Body Wave",
            "category": "Human Hair",
            "productType": "Lace Front",
            "price": "89.99",
            "stock": 15
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.active);
        assert_eq!(product.description, "");
        assert_eq!(product.image, None);
    }

    #[test]
    fn test_numeric_price_is_accepted() {
        let json = r#"{"id":2,"name":"Bob","category":"Synthetic","productType":"Bob",
            "price":45.5,"stock":3,"active":false}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::new(455, 1));
        assert!(!product.active);
    }

    #[test]
    fn test_stock_value() {
        let json = r#"{"id":3,"name":"Curly","category":"Human Hair","productType":"Full Lace",
            "price":"10.25","stock":4}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.stock_value(), Decimal::new(41, 0));
        assert!(product.in_stock());
    }
}
