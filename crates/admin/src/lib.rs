//! WigHub admin library.
//!
//! Back-office services over the same [`wighub_store::KeyValueStore`] the
//! storefront uses: product management, orders across all clients, client
//! suspension, support tickets and the dashboard.
//!
//! # Security
//!
//! Services do not check the admin session themselves. Front ends call
//! [`services::AdminAuthService::require_writer`] before any mutation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod services;

pub use config::{AdminConfig, ConfigError};
pub use error::AppError;
