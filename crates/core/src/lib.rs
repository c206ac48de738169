//! WigHub Core - Shared types library.
//!
//! This crate provides common types used across all WigHub components:
//! - `store` - Key-value store adapter and typed repositories
//! - `storefront` - Customer-facing catalog, account, cart and checkout services
//! - `admin` - Back-office services and dashboard aggregates
//! - `cli` - Command-line tools for seeding and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no store access. This keeps it
//! lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and statuses
//! - [`models`] - Records persisted as JSON documents in the store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
