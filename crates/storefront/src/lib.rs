//! WigHub storefront library.
//!
//! Customer-facing services over a [`wighub_store::KeyValueStore`]: catalog,
//! accounts, cart and checkout, orders, wishlist and support tickets.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod services;

pub use config::{ConfigError, PricingConfig, StorefrontConfig};
pub use error::{AppError, ErrorKind};
