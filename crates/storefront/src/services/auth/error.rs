//! Authentication error types.

use thiserror::Error;
use wighub_core::{EmailError, UsernameError};
use wighub_store::RepositoryError;

/// Errors that can occur during signup, login and session lookups.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid username format.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Username is already registered (case-insensitive).
    #[error("username already exists")]
    UsernameTaken,

    /// Email is already registered (case-insensitive).
    #[error("email already exists")]
    EmailTaken,

    /// Login form submitted with an empty identifier or password.
    #[error("username/email and password are required")]
    MissingCredentials,

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Account exists but has been suspended by an admin.
    #[error("account suspended")]
    AccountSuspended,

    /// No active session.
    #[error("not logged in")]
    NotLoggedIn,

    /// Repository/store error.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
