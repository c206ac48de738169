//! WigHub Store - the local key-value store used in place of a database.
//!
//! Every collection lives under a fixed key as one JSON document (see
//! [`keys`]). Services never touch raw strings: they go through the typed
//! repositories in [`repo`], which borrow an injected [`KeyValueStore`].
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local map, used by tests and embedders
//! - [`FileStore`] - one `<key>.json` file per key in a data directory
//!
//! # Consistency
//!
//! Read-modify-write sequences are only atomic within one process. Two
//! processes sharing a [`FileStore`] directory can lose updates to each other;
//! there is no cross-process locking.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod keys;
pub mod repo;

pub use backend::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use repo::RepositoryError;
