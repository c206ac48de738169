//! Back-office error types.

use thiserror::Error;
use wighub_core::{AccountId, AdminRole, EmailError, OrderId, OrderStatus, ProductId, TicketId};
use wighub_store::RepositoryError;

/// Errors that can occur during back-office operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A required field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Password too weak.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Price below zero.
    #[error("price must not be negative")]
    NegativePrice,

    /// Wrong email or password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An admin with this email already exists.
    #[error("admin already exists")]
    AdminExists,

    /// No admin is logged in.
    #[error("not logged in")]
    NotLoggedIn,

    /// The logged-in admin's role may not make changes.
    #[error("role {0} may not make changes")]
    Forbidden(AdminRole),

    /// Product does not exist.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// No client has an order with this ID.
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    /// Order statuses only move forward.
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Client does not exist.
    #[error("client {0} not found")]
    ClientNotFound(AccountId),

    /// Ticket does not exist.
    #[error("ticket {0} not found")]
    TicketNotFound(TicketId),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Repository/store error.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),
}
