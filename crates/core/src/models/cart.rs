//! Cart line and pricing totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::types::ProductId;

/// A product snapshot plus a requested quantity.
///
/// A cart holds at most one line per product; adding the same product again
/// increments `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub product_type: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot `product` into a new line with quantity 1.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            product_type: product.product_type.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unrounded `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Derived cart or order amounts, all unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}
