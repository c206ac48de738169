//! Unified error handling.
//!
//! Every service error folds into `AppError`, which classifies it for the
//! caller and produces a message that is safe to show a customer.

use thiserror::Error;
use wighub_store::RepositoryError;

use crate::services::auth::AuthError;
use crate::services::cart::CartError;
use crate::services::support::SupportError;
use crate::services::wishlist::WishlistError;

/// Broad class of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input; nothing was changed.
    Validation,
    /// Well-formed request refused by a store rule; nothing was changed.
    BusinessRule,
    /// The store or another piece of infrastructure failed.
    Storage,
}

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),

    /// Signup, login or session operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Cart or checkout operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Wishlist operation failed.
    #[error("Wishlist error: {0}")]
    Wishlist(#[from] WishlistError),

    /// Support ticket submission failed.
    #[error("Support error: {0}")]
    Support(#[from] SupportError),
}

impl AppError {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Repository(_) => ErrorKind::Storage,
            Self::Auth(err) => auth_kind(err),
            Self::Cart(err) => cart_kind(err),
            Self::Wishlist(err) => match err {
                WishlistError::ProductNotFound(_) => ErrorKind::BusinessRule,
                WishlistError::Cart(err) => cart_kind(err),
                WishlistError::Repository(_) => ErrorKind::Storage,
            },
            Self::Support(err) => match err {
                SupportError::MissingField(_) | SupportError::InvalidEmail(_) => {
                    ErrorKind::Validation
                }
                SupportError::Repository(_) => ErrorKind::Storage,
            },
        }
    }

    /// Message suitable for display. Storage details are not exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.kind() == ErrorKind::Storage {
            return "Something went wrong, please try again".to_string();
        }

        match self {
            Self::Auth(err) => match err {
                AuthError::InvalidUsername(_) => {
                    "Username must be 3-20 letters or numbers".to_string()
                }
                AuthError::InvalidEmail(_) => "Invalid email address".to_string(),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::PasswordMismatch => "Passwords do not match".to_string(),
                AuthError::UsernameTaken => "Username already exists".to_string(),
                AuthError::EmailTaken => "An account with this email already exists".to_string(),
                AuthError::MissingCredentials => {
                    "Please enter your username or email and password".to_string()
                }
                AuthError::InvalidCredentials => "Invalid credentials".to_string(),
                AuthError::AccountSuspended => {
                    "This account has been suspended, please contact support".to_string()
                }
                AuthError::NotLoggedIn => "Please log in first".to_string(),
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    "Authentication error".to_string()
                }
            },
            Self::Cart(err) | Self::Wishlist(WishlistError::Cart(err)) => cart_message(err),
            Self::Wishlist(WishlistError::ProductNotFound(_)) => "Product not found".to_string(),
            Self::Support(SupportError::InvalidEmail(_)) => "Invalid email address".to_string(),
            _ => {
                let message = self.to_string();
                message
                    .split_once(": ")
                    .map_or(message.clone(), |(_, detail)| detail.to_string())
            }
        }
    }
}

const fn auth_kind(err: &AuthError) -> ErrorKind {
    match err {
        AuthError::InvalidUsername(_)
        | AuthError::InvalidEmail(_)
        | AuthError::WeakPassword(_)
        | AuthError::PasswordMismatch
        | AuthError::MissingCredentials => ErrorKind::Validation,
        AuthError::UsernameTaken
        | AuthError::EmailTaken
        | AuthError::InvalidCredentials
        | AuthError::AccountSuspended
        | AuthError::NotLoggedIn => ErrorKind::BusinessRule,
        AuthError::Repository(_) | AuthError::PasswordHash => ErrorKind::Storage,
    }
}

const fn cart_kind(err: &CartError) -> ErrorKind {
    match err {
        CartError::MissingShippingDetails(_) => ErrorKind::Validation,
        CartError::ProductNotFound(_)
        | CartError::ProductUnavailable(_)
        | CartError::OutOfStock { .. }
        | CartError::InsufficientStock { .. }
        | CartError::StockChanged { .. }
        | CartError::EmptyCart => ErrorKind::BusinessRule,
        CartError::Repository(_) => ErrorKind::Storage,
    }
}

fn cart_message(err: &CartError) -> String {
    match err {
        CartError::ProductNotFound(_) => "Product not found".to_string(),
        CartError::ProductUnavailable(_) => "This product is no longer available".to_string(),
        CartError::OutOfStock { name } => format!("{name} is out of stock"),
        CartError::InsufficientStock { name, available, .. } => {
            format!("Only {available} of {name} available")
        }
        CartError::StockChanged { name, available, .. } => {
            format!("Stock for {name} changed, only {available} left. Please update your cart")
        }
        CartError::EmptyCart => "Your cart is empty".to_string(),
        CartError::MissingShippingDetails(_) => "Please fill in all shipping fields".to_string(),
        CartError::Repository(_) => "Something went wrong, please try again".to_string(),
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use wighub_core::ProductId;
    use wighub_store::StoreError;

    use super::*;

    #[test]
    fn test_app_error_kinds() {
        assert_eq!(
            AppError::from(AuthError::PasswordMismatch).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            AppError::from(AuthError::UsernameTaken).kind(),
            ErrorKind::BusinessRule
        );
        assert_eq!(
            AppError::from(CartError::EmptyCart).kind(),
            ErrorKind::BusinessRule
        );
        assert_eq!(
            AppError::from(CartError::MissingShippingDetails(vec!["city"])).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            AppError::from(WishlistError::Cart(CartError::OutOfStock {
                name: "Bob".to_string()
            }))
            .kind(),
            ErrorKind::BusinessRule
        );
        assert_eq!(
            AppError::from(SupportError::MissingField("name")).kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_storage_errors_are_hidden() {
        let err = AppError::from(CartError::Repository(RepositoryError::DataCorruption(
            "cart_a@b.co: expected value".to_string(),
        )));
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(!err.user_message().contains("cart_a@b.co"));

        let err = AppError::from(RepositoryError::Store(StoreError::Unavailable(
            "disk full".to_string(),
        )));
        assert!(!err.user_message().contains("disk"));
    }

    #[test]
    fn test_user_messages() {
        let err = AppError::from(CartError::InsufficientStock {
            name: "Body Wave".to_string(),
            available: 1,
            requested: 2,
        });
        assert_eq!(err.user_message(), "Only 1 of Body Wave available");

        let err = AppError::from(AuthError::InvalidCredentials);
        assert_eq!(err.user_message(), "Invalid credentials");

        let err = AppError::from(WishlistError::ProductNotFound(ProductId::new(3)));
        assert_eq!(err.user_message(), "Product not found");

        let err = AppError::from(SupportError::MissingField("subject"));
        assert_eq!(err.user_message(), "subject is required");
    }
}
