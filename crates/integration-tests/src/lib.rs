//! Integration tests for WigHub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p wighub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping` - Customer journey from signup to delivered order
//! - `back_office` - Admin operations seen from the storefront
//! - `file_store` - Persistence on disk
//!
//! Tests run against `MemoryStore` unless they exercise the file backend,
//! which gets a fresh directory under the system temp dir.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use rust_decimal::Decimal;
use wighub_core::{Product, ProductId, Session, ShippingDetails};
use wighub_store::KeyValueStore;
use wighub_store::repo::ProductRepository;
use wighub_storefront::services::AuthService;

/// Password used for every test customer.
pub const PASSWORD: &str = "secret1";

/// A fresh, empty directory for a `FileStore`.
#[must_use]
pub fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("wighub-it-{}", uuid::Uuid::new_v4()))
}

/// A product with the given price and stock.
#[must_use]
pub fn product(id: i64, name: &str, price: Decimal, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category: "Human Hair".to_owned(),
        product_type: "Lace Front".to_owned(),
        price,
        stock,
        description: format!("{name}, 18 inches"),
        active: true,
        image: None,
    }
}

/// Store `products` as the catalog.
///
/// # Panics
///
/// Panics if the store rejects the write.
#[allow(clippy::unwrap_used)]
pub fn seed_catalog(store: &dyn KeyValueStore, products: &[Product]) {
    ProductRepository::new(store).save(products).unwrap();
}

/// Sign up a customer and return their session.
///
/// # Panics
///
/// Panics if signup fails.
#[allow(clippy::unwrap_used)]
pub fn sign_up(store: &dyn KeyValueStore, username: &str) -> Session {
    AuthService::new(store)
        .signup(username, &format!("{username}@wighub.com"), PASSWORD, PASSWORD)
        .unwrap()
}

/// Complete shipping details.
#[must_use]
pub fn shipping() -> ShippingDetails {
    ShippingDetails {
        full_name: "Ada Lovelace".to_owned(),
        address: "1 Curl St".to_owned(),
        city: "Atlanta".to_owned(),
        postal_code: "30301".to_owned(),
        phone: Some("555-0100".to_owned()),
    }
}
