//! Cart/checkout engine.
//!
//! Each account owns one cart under `cart_<email>`. A cart moves through
//! `Empty → Populated → CheckedOut(Order) → Empty`; every mutation is written
//! through to the store before returning.
//!
//! Stock is validated against the live catalog on every mutation and again at
//! checkout, since it may have changed in between.

mod checkout;
mod error;
pub mod pricing;

pub use error::CartError;
pub use pricing::compute_totals;

use serde::Serialize;
use tracing::{debug, instrument};

use wighub_core::{CartLine, Email, ProductId, Totals};
use wighub_store::KeyValueStore;
use wighub_store::repo::{
    CartRepository, OrderRepository, OrderSequence, ProductRepository, or_empty,
};

use crate::config::PricingConfig;

/// A cart together with its derived amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub totals: Totals,
    pub item_count: u32,
}

/// Cart service.
///
/// Handles cart edits, pricing and checkout for one store.
pub struct CartService<'a> {
    products: ProductRepository<'a>,
    carts: CartRepository<'a>,
    orders: OrderRepository<'a>,
    sequence: OrderSequence<'a>,
    pricing: &'a PricingConfig,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore, pricing: &'a PricingConfig) -> Self {
        Self {
            products: ProductRepository::new(store),
            carts: CartRepository::new(store),
            orders: OrderRepository::new(store),
            sequence: OrderSequence::new(store),
            pricing,
        }
    }

    /// The cart of `owner`; an unreadable cart shows as empty.
    #[must_use]
    pub fn cart(&self, owner: &Email) -> Vec<CartLine> {
        or_empty(self.carts.load(owner), "cart")
    }

    /// The cart of `owner` with totals and unit count.
    #[must_use]
    pub fn summary(&self, owner: &Email) -> CartSummary {
        let lines = self.cart(owner);
        CartSummary {
            totals: compute_totals(&lines, self.pricing),
            item_count: pricing::item_count(&lines),
            lines,
        }
    }

    /// Number of units in the cart of `owner`.
    #[must_use]
    pub fn cart_count(&self, owner: &Email) -> u32 {
        pricing::item_count(&self.cart(owner))
    }

    /// Price `lines` with this service's pricing rules.
    #[must_use]
    pub fn totals(&self, lines: &[CartLine]) -> Totals {
        compute_totals(lines, self.pricing)
    }

    /// Add one unit of a product to the cart.
    ///
    /// A product already in the cart has its quantity incremented; otherwise a
    /// new line with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ProductNotFound` / `CartError::ProductUnavailable` for
    /// unknown or hidden products.
    /// Returns `CartError::OutOfStock` if the product has no stock.
    /// Returns `CartError::InsufficientStock` if the new quantity would exceed stock.
    #[instrument(skip(self))]
    pub fn add_to_cart(
        &self,
        owner: &Email,
        product_id: ProductId,
    ) -> Result<Vec<CartLine>, CartError> {
        let product = self
            .products
            .get(product_id)?
            .ok_or(CartError::ProductNotFound(product_id))?;
        if !product.active {
            return Err(CartError::ProductUnavailable(product_id));
        }
        if !product.in_stock() {
            return Err(CartError::OutOfStock { name: product.name });
        }

        let mut lines = self.carts.load(owner)?;
        if let Some(line) = lines.iter_mut().find(|line| line.id == product_id) {
            let requested = line.quantity.saturating_add(1);
            if requested > product.stock {
                debug!(requested, available = product.stock, "Rejected add: insufficient stock");
                return Err(CartError::InsufficientStock {
                    name: product.name,
                    available: product.stock,
                    requested,
                });
            }
            line.quantity = requested;
        } else {
            lines.push(CartLine::new(&product));
        }

        self.carts.save(owner, &lines)?;
        Ok(lines)
    }

    /// Change a line's quantity by `delta`.
    ///
    /// A resulting quantity below 1 removes the line. A product that is not in
    /// the cart leaves the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InsufficientStock` if the new quantity exceeds current
    /// stock; the cart is left unchanged.
    /// Returns `CartError::ProductNotFound` if the product left the catalog and
    /// the quantity would stay above zero.
    #[instrument(skip(self))]
    pub fn update_quantity(
        &self,
        owner: &Email,
        product_id: ProductId,
        delta: i32,
    ) -> Result<Vec<CartLine>, CartError> {
        let mut lines = self.carts.load(owner)?;
        let Some(position) = lines.iter().position(|line| line.id == product_id) else {
            return Ok(lines);
        };

        let current = lines.get(position).map_or(0, |line| line.quantity);
        let requested = i64::from(current) + i64::from(delta);
        if requested < 1 {
            lines.remove(position);
            self.carts.save(owner, &lines)?;
            return Ok(lines);
        }

        let product = self
            .products
            .get(product_id)?
            .ok_or(CartError::ProductNotFound(product_id))?;
        let requested = u32::try_from(requested).unwrap_or(u32::MAX);
        if requested > product.stock {
            return Err(CartError::InsufficientStock {
                name: product.name,
                available: product.stock,
                requested,
            });
        }

        if let Some(line) = lines.get_mut(position) {
            line.quantity = requested;
        }
        self.carts.save(owner, &lines)?;
        Ok(lines)
    }

    /// Remove a product's line from the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the cart cannot be read or written.
    #[instrument(skip(self))]
    pub fn remove_from_cart(
        &self,
        owner: &Email,
        product_id: ProductId,
    ) -> Result<Vec<CartLine>, CartError> {
        let mut lines = self.carts.load(owner)?;
        lines.retain(|line| line.id != product_id);
        self.carts.save(owner, &lines)?;
        Ok(lines)
    }

    /// Empty the cart of `owner`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the cart cannot be written.
    pub fn clear_cart(&self, owner: &Email) -> Result<(), CartError> {
        self.carts.clear(owner)?;
        Ok(())
    }
}
