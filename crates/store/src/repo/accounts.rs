//! Customer and admin account repositories.

use wighub_core::{Account, AccountId, Admin, AdminId};

use super::{RepositoryError, read_collection, write_json};
use crate::backend::KeyValueStore;
use crate::keys;

/// Repository for the shared customer (client) collection.
pub struct AccountRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load every account in signup order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the collection does not decode.
    pub fn load(&self) -> Result<Vec<Account>, RepositoryError> {
        read_collection(self.store, keys::CLIENTS)
    }

    /// Replace the account collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save(&self, accounts: &[Account]) -> Result<(), RepositoryError> {
        write_json(self.store, keys::CLIENTS, accounts)
    }
}

/// Next account ID: max existing + 1, or 0 for the first account.
#[must_use]
pub fn next_account_id(accounts: &[Account]) -> AccountId {
    accounts
        .iter()
        .map(|a| a.id)
        .max()
        .map_or(AccountId::new(0), |id| id.next())
}

/// Repository for the admin collection.
pub struct AdminRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load every admin.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the collection does not decode.
    pub fn load(&self) -> Result<Vec<Admin>, RepositoryError> {
        read_collection(self.store, keys::ADMINS)
    }

    /// Replace the admin collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save(&self, admins: &[Admin]) -> Result<(), RepositoryError> {
        write_json(self.store, keys::ADMINS, admins)
    }
}

/// Next admin ID: max existing + 1, or 1 for the first admin.
#[must_use]
pub fn next_admin_id(admins: &[Admin]) -> AdminId {
    admins
        .iter()
        .map(|a| a.id)
        .max()
        .map_or(AdminId::new(1), |id| id.next())
}
