//! Session singletons.

use wighub_core::{AdminSession, Session, SessionToken, SessionUser};

use super::{RepositoryError, read_json, write_json};
use crate::backend::KeyValueStore;
use crate::keys;

/// Repository for the customer and admin session singletons.
///
/// The customer session is split over `session_token` and `session_user`; a
/// session only exists when both keys are present.
pub struct SessionRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the current customer session.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if either key does not decode.
    pub fn load(&self) -> Result<Option<Session>, RepositoryError> {
        let token: Option<SessionToken> = read_json(self.store, keys::SESSION_TOKEN)?;
        let user: Option<SessionUser> = read_json(self.store, keys::SESSION_USER)?;
        Ok(token
            .zip(user)
            .map(|(token, user)| Session { token, user }))
    }

    /// Replace the customer session.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save(&self, session: &Session) -> Result<(), RepositoryError> {
        write_json(self.store, keys::SESSION_TOKEN, &session.token)?;
        write_json(self.store, keys::SESSION_USER, &session.user)
    }

    /// Remove the customer session.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.store.remove(keys::SESSION_TOKEN)?;
        self.store.remove(keys::SESSION_USER)?;
        Ok(())
    }

    /// Load the current admin session.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the session does not decode.
    pub fn load_admin(&self) -> Result<Option<AdminSession>, RepositoryError> {
        read_json(self.store, keys::ADMIN_SESSION)
    }

    /// Replace the admin session.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save_admin(&self, session: &AdminSession) -> Result<(), RepositoryError> {
        write_json(self.store, keys::ADMIN_SESSION, session)
    }

    /// Remove the admin session.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn clear_admin(&self) -> Result<(), RepositoryError> {
        self.store.remove(keys::ADMIN_SESSION)?;
        Ok(())
    }
}
