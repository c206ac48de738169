//! Session records.
//!
//! The store holds at most one customer session and one admin session at a
//! time; logging in overwrites whatever was there.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::{Account, Admin};
use crate::types::{AccountId, AdminId, AdminRole, Email};

/// Opaque session token.
///
/// `Debug` is redacted so tokens do not end up in logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an already generated token string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// Minimal profile cached alongside the customer session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: AccountId,
    pub username: String,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for SessionUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.to_string(),
            email: account.email.clone(),
            created_at: account.created_at,
        }
    }
}

/// The active customer session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: SessionToken,
    pub user: SessionUser,
}

/// The active admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub token: SessionToken,
    pub admin_id: AdminId,
    pub name: String,
    pub email: Email,
    pub role: AdminRole,
}

impl AdminSession {
    /// Build a session for `admin` with the given token.
    #[must_use]
    pub fn new(token: SessionToken, admin: &Admin) -> Self {
        Self {
            token,
            admin_id: admin.id,
            name: admin.name.clone(),
            email: admin.email.clone(),
            role: admin.role,
        }
    }
}
