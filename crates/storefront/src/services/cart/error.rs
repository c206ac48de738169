//! Cart and checkout error types.

use thiserror::Error;
use wighub_core::ProductId;
use wighub_store::RepositoryError;

/// Errors that can occur while editing a cart or checking out.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product is not in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// The product is hidden from the storefront.
    #[error("product {0} is not available")]
    ProductUnavailable(ProductId),

    /// The product has no stock at all.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// The requested quantity exceeds current stock.
    #[error("only {available} of {name} in stock (requested {requested})")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Stock dropped below a cart line's quantity since it was added.
    #[error("stock changed for {name}: {available} available, {requested} in cart")]
    StockChanged {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Checkout was attempted on an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Required shipping fields are blank.
    #[error("missing shipping details: {}", .0.join(", "))]
    MissingShippingDetails(Vec<&'static str>),

    /// Repository/store error.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),
}
