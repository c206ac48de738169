//! Unified error handling for admin.

use thiserror::Error;
use wighub_storefront::ErrorKind;

use crate::config::ConfigError;
use crate::services::AdminError;

/// Application-level error type for the back office.
#[derive(Debug, Error)]
pub enum AppError {
    /// Back-office operation failed.
    #[error("Admin error: {0}")]
    Admin(#[from] AdminError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Admin(err) => match err {
                AdminError::InvalidEmail(_)
                | AdminError::MissingField(_)
                | AdminError::WeakPassword(_)
                | AdminError::NegativePrice => ErrorKind::Validation,
                AdminError::InvalidCredentials
                | AdminError::AdminExists
                | AdminError::NotLoggedIn
                | AdminError::Forbidden(_)
                | AdminError::ProductNotFound(_)
                | AdminError::OrderNotFound(_)
                | AdminError::InvalidTransition { .. }
                | AdminError::ClientNotFound(_)
                | AdminError::TicketNotFound(_) => ErrorKind::BusinessRule,
                AdminError::PasswordHash | AdminError::Repository(_) => ErrorKind::Storage,
            },
            Self::Config(_) => ErrorKind::Validation,
        }
    }

    /// Message suitable for display. Storage details are not exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.kind() == ErrorKind::Storage {
            return "Something went wrong, please try again".to_string();
        }

        match self {
            Self::Admin(AdminError::InvalidEmail(_)) => "Invalid email address".to_string(),
            Self::Admin(AdminError::Forbidden(_)) => {
                "Your role does not allow changes".to_string()
            }
            Self::Admin(err) => err.to_string(),
            Self::Config(err) => err.to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use wighub_core::{AdminRole, OrderStatus};
    use wighub_store::{RepositoryError, StoreError};

    use super::*;

    #[test]
    fn test_admin_error_kinds() {
        assert_eq!(
            AppError::from(AdminError::NegativePrice).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            AppError::from(AdminError::InvalidTransition {
                from: OrderStatus::Shipped,
                to: OrderStatus::Pending,
            })
            .kind(),
            ErrorKind::BusinessRule
        );
        assert_eq!(
            AppError::from(AdminError::Repository(RepositoryError::Store(
                StoreError::Unavailable("locked".to_string())
            )))
            .kind(),
            ErrorKind::Storage
        );
    }

    #[test]
    fn test_user_messages() {
        let err = AppError::from(AdminError::InvalidTransition {
            from: OrderStatus::Shipped,
            to: OrderStatus::Pending,
        });
        assert_eq!(err.user_message(), "cannot move order from shipped to pending");

        let err = AppError::from(AdminError::Forbidden(AdminRole::Viewer));
        assert_eq!(err.user_message(), "Your role does not allow changes");

        let err = AppError::from(AdminError::Repository(RepositoryError::DataCorruption(
            "products: eof".to_string(),
        )));
        assert!(!err.user_message().contains("products"));
    }
}
