//! Account service: signup, login and the customer session.
//!
//! The store holds a single customer session. Logging in replaces it and
//! logging out removes it, whoever it belonged to.

mod error;
pub mod password;

pub use error::AuthError;

use chrono::Utc;
use tracing::{debug, info, instrument};

use wighub_core::{Account, AccountStatus, Email, Session, SessionUser, Username};
use wighub_store::KeyValueStore;
use wighub_store::repo::{
    AccountRepository, CartRepository, OrderRepository, SessionRepository, WishlistRepository,
    next_account_id,
};

use password::{generate_token, hash_password, validate_password, verify_password};

/// Authentication service.
///
/// Handles customer signup, login and session management.
pub struct AuthService<'a> {
    accounts: AccountRepository<'a>,
    carts: CartRepository<'a>,
    wishlists: WishlistRepository<'a>,
    orders: OrderRepository<'a>,
    sessions: SessionRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            accounts: AccountRepository::new(store),
            carts: CartRepository::new(store),
            wishlists: WishlistRepository::new(store),
            orders: OrderRepository::new(store),
            sessions: SessionRepository::new(store),
        }
    }

    /// Register a new customer and log them in.
    ///
    /// The new account gets ID max + 1 (0 for the first account) and empty
    /// cart, wishlist and order collections.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` / `AuthError::InvalidEmail` for malformed input.
    /// Returns `AuthError::WeakPassword` if the password is shorter than 6 characters.
    /// Returns `AuthError::PasswordMismatch` if `confirm` differs from `password`.
    /// Returns `AuthError::UsernameTaken` / `AuthError::EmailTaken` on duplicates.
    #[instrument(skip(self, password, confirm))]
    pub fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Session, AuthError> {
        let username = Username::parse(username)?;
        let email = Email::parse(email)?;
        validate_password(password)?;
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let mut accounts = self.accounts.load()?;
        if accounts.iter().any(|a| a.username.matches(username.as_str())) {
            debug!("Rejected signup: username taken");
            return Err(AuthError::UsernameTaken);
        }
        if accounts.iter().any(|a| a.email.matches(email.as_str())) {
            debug!("Rejected signup: email taken");
            return Err(AuthError::EmailTaken);
        }

        let account = Account {
            id: next_account_id(&accounts),
            username,
            email,
            password_hash: hash_password(password)?,
            created_at: Utc::now(),
            last_login: None,
            status: AccountStatus::Active,
        };
        // The account is written last so a failed write leaves the signup retryable.
        self.carts.clear(&account.email)?;
        self.wishlists.save(&account.email, &[])?;
        self.orders.save(&account.email, &[])?;

        accounts.push(account.clone());
        self.accounts.save(&accounts)?;

        info!(account_id = %account.id, "Created customer account");
        self.start_session(&account)
    }

    /// Log in with a username or email and a password.
    ///
    /// Both identifiers match case-insensitively. On success the account's
    /// `last_login` is updated and a fresh session replaces any existing one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is blank.
    /// Returns `AuthError::InvalidCredentials` if no account matches.
    /// Returns `AuthError::AccountSuspended` if the account has been suspended.
    #[instrument(skip(self, password))]
    pub fn login(&self, username_or_email: &str, password: &str) -> Result<Session, AuthError> {
        let identifier = username_or_email.trim();
        if identifier.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let mut accounts = self.accounts.load()?;
        let account = accounts
            .iter_mut()
            .find(|a| a.username.matches(identifier) || a.email.matches(identifier))
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &account.password_hash)?;
        if !account.is_active() {
            return Err(AuthError::AccountSuspended);
        }

        account.last_login = Some(Utc::now());
        let account = account.clone();
        self.accounts.save(&accounts)?;

        info!(account_id = %account.id, "Customer logged in");
        self.start_session(&account)
    }

    /// Clear the customer session unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store cannot be written.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        info!("Customer logged out");
        Ok(())
    }

    /// The current customer session, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the session cannot be read.
    pub fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.sessions.load()?)
    }

    /// The current customer session, or `AuthError::NotLoggedIn`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotLoggedIn` if nobody is logged in.
    pub fn require_session(&self) -> Result<Session, AuthError> {
        self.current_session()?.ok_or(AuthError::NotLoggedIn)
    }

    fn start_session(&self, account: &Account) -> Result<Session, AuthError> {
        let session = Session {
            token: generate_token(),
            user: SessionUser::from(account),
        };
        self.sessions.save(&session)?;
        Ok(session)
    }
}
