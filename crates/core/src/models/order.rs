//! Order records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::{CartLine, Totals};
use crate::types::{AccountId, Email, OrderId, OrderStatus};

/// Who placed an order, copied at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSnapshot {
    pub id: AccountId,
    pub username: String,
    pub email: Email,
}

/// Delivery details entered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ShippingDetails {
    /// Names of required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("fullName", &self.full_name),
            ("address", &self.address),
            ("city", &self.city),
            ("postalCode", &self.postal_code),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// A placed order.
///
/// Items and amounts are snapshots taken at checkout; only `status` changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
    pub customer: CustomerSnapshot,
    #[serde(default)]
    pub shipping_details: ShippingDetails,
}

impl Order {
    /// The order's amounts as a [`Totals`] value.
    #[must_use]
    pub const fn totals(&self) -> Totals {
        Totals {
            subtotal: self.subtotal,
            tax: self.tax,
            shipping: self.shipping,
            total: self.total,
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_reports_blank_values() {
        let details = ShippingDetails {
            full_name: "Ada Obi".to_owned(),
            address: "  ".to_owned(),
            city: "Lagos".to_owned(),
            postal_code: String::new(),
            phone: None,
        };
        assert_eq!(details.missing_fields(), vec!["address", "postalCode"]);
    }
}
