//! Client (customer account) management.

use tracing::{info, instrument};

use wighub_core::{Account, AccountId, AccountStatus};
use wighub_store::KeyValueStore;
use wighub_store::repo::{AccountRepository, SessionRepository};

use super::AdminError;

/// Client management service.
pub struct ClientService<'a> {
    accounts: AccountRepository<'a>,
    sessions: SessionRepository<'a>,
}

impl<'a> ClientService<'a> {
    /// Create a new client management service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            accounts: AccountRepository::new(store),
            sessions: SessionRepository::new(store),
        }
    }

    /// Every client account in signup order.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the accounts cannot be read.
    pub fn list(&self) -> Result<Vec<Account>, AdminError> {
        Ok(self.accounts.load()?)
    }

    /// Suspend or reactivate a client.
    ///
    /// Suspending the client who holds the customer session ends that session.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::ClientNotFound` if there is no such client.
    #[instrument(skip(self))]
    pub fn set_status(&self, id: AccountId, status: AccountStatus) -> Result<Account, AdminError> {
        let mut accounts = self.accounts.load()?;
        let account = accounts
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or(AdminError::ClientNotFound(id))?;
        account.status = status;
        let account = account.clone();
        self.accounts.save(&accounts)?;

        if status == AccountStatus::Suspended
            && self
                .sessions
                .load()?
                .is_some_and(|session| session.user.id == id)
        {
            self.sessions.clear()?;
            info!(account_id = %id, "Ended session of suspended client");
        }

        info!(account_id = %id, ?status, "Client status changed");
        Ok(account)
    }
}
