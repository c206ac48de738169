//! Admin authentication service.
//!
//! Admins log in with email and password (Argon2id hashes, shared with the
//! storefront). The admin session is a singleton separate from the customer
//! session.

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};

use wighub_core::{Admin, AdminRole, AdminSession, Email};
use wighub_store::KeyValueStore;
use wighub_store::repo::{AdminRepository, SessionRepository, next_admin_id};
use wighub_storefront::services::auth::{AuthError, password};

use super::AdminError;

/// Admin authentication service.
pub struct AdminAuthService<'a> {
    admins: AdminRepository<'a>,
    sessions: SessionRepository<'a>,
}

impl<'a> AdminAuthService<'a> {
    /// Create a new admin authentication service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            admins: AdminRepository::new(store),
            sessions: SessionRepository::new(store),
        }
    }

    /// Register a new admin.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::MissingField` if the name is blank.
    /// Returns `AdminError::InvalidEmail` / `AdminError::WeakPassword` for bad input.
    /// Returns `AdminError::AdminExists` if the email is already registered.
    #[instrument(skip(self, password))]
    pub fn create_admin(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
        role: AdminRole,
    ) -> Result<Admin, AdminError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AdminError::MissingField("name"));
        }
        let email = Email::parse(email)?;
        password::validate_password(password.expose_secret()).map_err(from_auth)?;

        let mut admins = self.admins.load()?;
        if admins.iter().any(|admin| admin.email.matches(email.as_str())) {
            return Err(AdminError::AdminExists);
        }

        let admin = Admin {
            id: next_admin_id(&admins),
            name: name.to_owned(),
            email,
            password_hash: password::hash_password(password.expose_secret()).map_err(from_auth)?,
            role,
            created_at: Utc::now(),
        };
        admins.push(admin.clone());
        self.admins.save(&admins)?;

        info!(admin_id = %admin.id, role = %admin.role, "Created admin");
        Ok(admin)
    }

    /// Log in as an admin, replacing any existing admin session.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::InvalidCredentials` if no admin matches.
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &SecretString) -> Result<AdminSession, AdminError> {
        let admins = self.admins.load()?;
        let admin = admins
            .iter()
            .find(|admin| admin.email.matches(email))
            .ok_or(AdminError::InvalidCredentials)?;

        password::verify_password(password.expose_secret(), &admin.password_hash)
            .map_err(|_| AdminError::InvalidCredentials)?;

        let session = AdminSession::new(password::generate_token(), admin);
        self.sessions.save_admin(&session)?;

        info!(admin_id = %admin.id, "Admin logged in");
        Ok(session)
    }

    /// Clear the admin session.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the store cannot be written.
    pub fn logout(&self) -> Result<(), AdminError> {
        self.sessions.clear_admin()?;
        info!("Admin logged out");
        Ok(())
    }

    /// The current admin session, if any.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the session cannot be read.
    pub fn current_session(&self) -> Result<Option<AdminSession>, AdminError> {
        Ok(self.sessions.load_admin()?)
    }

    /// The current admin session, provided its role may make changes.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotLoggedIn` without a session and
    /// `AdminError::Forbidden` for read-only roles.
    pub fn require_writer(&self) -> Result<AdminSession, AdminError> {
        let session = self.current_session()?.ok_or(AdminError::NotLoggedIn)?;
        if !session.role.can_write() {
            debug!(role = %session.role, "Rejected write by read-only admin");
            return Err(AdminError::Forbidden(session.role));
        }
        Ok(session)
    }
}

fn from_auth(err: AuthError) -> AdminError {
    match err {
        AuthError::WeakPassword(msg) => AdminError::WeakPassword(msg),
        AuthError::InvalidCredentials => AdminError::InvalidCredentials,
        AuthError::Repository(err) => AdminError::Repository(err),
        _ => AdminError::PasswordHash,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wighub_core::AdminId;
    use wighub_store::MemoryStore;

    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_owned())
    }

    #[test]
    fn test_create_admin_and_login() {
        let store = MemoryStore::new();
        let service = AdminAuthService::new(&store);

        let admin = service
            .create_admin("Ops", "ops@wighub.com", &secret("hunter22"), AdminRole::SuperAdmin)
            .unwrap();
        assert_eq!(admin.id, AdminId::new(1));
        assert_ne!(admin.password_hash, "hunter22");

        let session = service.login("OPS@wighub.com", &secret("hunter22")).unwrap();
        assert_eq!(session.admin_id, admin.id);
        assert_eq!(service.current_session().unwrap(), Some(session));
        assert!(service.require_writer().is_ok());

        service.logout().unwrap();
        assert!(matches!(service.require_writer(), Err(AdminError::NotLoggedIn)));
    }

    #[test]
    fn test_duplicate_admin_email_is_rejected() {
        let store = MemoryStore::new();
        let service = AdminAuthService::new(&store);
        service
            .create_admin("Ops", "ops@wighub.com", &secret("hunter22"), AdminRole::Admin)
            .unwrap();

        let result =
            service.create_admin("Other", "Ops@WigHub.com", &secret("hunter22"), AdminRole::Admin);
        assert!(matches!(result, Err(AdminError::AdminExists)));
    }

    #[test]
    fn test_create_admin_validation() {
        let store = MemoryStore::new();
        let service = AdminAuthService::new(&store);

        assert!(matches!(
            service.create_admin(" ", "ops@wighub.com", &secret("hunter22"), AdminRole::Admin),
            Err(AdminError::MissingField("name"))
        ));
        assert!(matches!(
            service.create_admin("Ops", "ops", &secret("hunter22"), AdminRole::Admin),
            Err(AdminError::InvalidEmail(_))
        ));
        assert!(matches!(
            service.create_admin("Ops", "ops@wighub.com", &secret("abc"), AdminRole::Admin),
            Err(AdminError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let store = MemoryStore::new();
        let service = AdminAuthService::new(&store);
        service
            .create_admin("Ops", "ops@wighub.com", &secret("hunter22"), AdminRole::Admin)
            .unwrap();

        assert!(matches!(
            service.login("ops@wighub.com", &secret("hunter23")),
            Err(AdminError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("nobody@wighub.com", &secret("hunter22")),
            Err(AdminError::InvalidCredentials)
        ));
        assert!(service.current_session().unwrap().is_none());
    }

    #[test]
    fn test_viewer_cannot_write() {
        let store = MemoryStore::new();
        let service = AdminAuthService::new(&store);
        service
            .create_admin("Eyes", "eyes@wighub.com", &secret("hunter22"), AdminRole::Viewer)
            .unwrap();
        service.login("eyes@wighub.com", &secret("hunter22")).unwrap();

        assert!(matches!(
            service.require_writer(),
            Err(AdminError::Forbidden(AdminRole::Viewer))
        ));
    }
}
