//! Customer and admin account records.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AccountId, AccountStatus, AdminId, AdminRole, Email, Username};

/// A customer account ("client").
///
/// Only an Argon2 PHC hash of the password is stored.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub email: Email,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: AccountStatus,
}

impl Account {
    /// Whether the account may log in.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("last_login", &self.last_login)
            .field("status", &self.status)
            .finish()
    }
}

/// A back-office administrator.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: AdminId,
    pub name: String,
    pub email: Email,
    pub password_hash: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password_hash() {
        let account = Account {
            id: AccountId::new(0),
            username: Username::parse("wiglover").unwrap(),
            email: Email::parse("wig@lover.com").unwrap(),
            password_hash: "$argon2id$secret-material".to_owned(),
            created_at: Utc::now(),
            last_login: None,
            status: AccountStatus::Active,
        };
        let debug = format!("{account:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-material"));
    }

    #[test]
    fn test_status_defaults_to_active() {
        let json = r#"{"id":3,"username":"bob123","email":"bob@x.io",
            "passwordHash":"h","createdAt":"2024-05-01T10:00:00Z"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.is_active());
        assert_eq!(account.last_login, None);
    }
}
