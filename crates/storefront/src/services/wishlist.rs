//! Wishlist service.
//!
//! A wishlist is a set of product snapshots per account, unique by product ID.

use thiserror::Error;
use tracing::{debug, instrument};

use wighub_core::{CartLine, Email, ProductId, ProductSnapshot};
use wighub_store::repo::{ProductRepository, WishlistRepository, or_empty};
use wighub_store::{KeyValueStore, RepositoryError};

use super::cart::{CartError, CartService};

/// Errors from wishlist operations.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// No product with this ID in the catalog.
    #[error("product not found")]
    ProductNotFound(ProductId),

    /// The cart refused the product when moving it over.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Storage failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Wishlist service.
pub struct WishlistService<'a> {
    products: ProductRepository<'a>,
    wishlists: WishlistRepository<'a>,
}

impl<'a> WishlistService<'a> {
    /// Create a new wishlist service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            products: ProductRepository::new(store),
            wishlists: WishlistRepository::new(store),
        }
    }

    /// Wishlist items of `owner`. An unreadable wishlist shows as empty.
    #[must_use]
    pub fn items(&self, owner: &Email) -> Vec<ProductSnapshot> {
        or_empty(self.wishlists.load(owner), "wishlist")
    }

    /// Whether `product_id` is on the wishlist of `owner`.
    #[must_use]
    pub fn contains(&self, owner: &Email, product_id: ProductId) -> bool {
        self.items(owner).iter().any(|item| item.id == product_id)
    }

    /// Add a product to the wishlist.
    ///
    /// Returns `false` if it was already there.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::ProductNotFound` if the product does not exist.
    #[instrument(skip(self))]
    pub fn add(&self, owner: &Email, product_id: ProductId) -> Result<bool, WishlistError> {
        let mut items = self.wishlists.load(owner)?;
        if items.iter().any(|item| item.id == product_id) {
            debug!("Already on wishlist");
            return Ok(false);
        }

        let product = self
            .products
            .get(product_id)?
            .ok_or(WishlistError::ProductNotFound(product_id))?;
        items.push(product.snapshot());
        self.wishlists.save(owner, &items)?;
        Ok(true)
    }

    /// Remove a product from the wishlist.
    ///
    /// Returns `false` if it was not there.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Repository` if the wishlist cannot be read or written.
    #[instrument(skip(self))]
    pub fn remove(&self, owner: &Email, product_id: ProductId) -> Result<bool, WishlistError> {
        let mut items = self.wishlists.load(owner)?;
        let before = items.len();
        items.retain(|item| item.id != product_id);
        if items.len() == before {
            return Ok(false);
        }
        self.wishlists.save(owner, &items)?;
        Ok(true)
    }

    /// Add a wishlisted product to the cart, then drop it from the wishlist.
    ///
    /// The wishlist is left alone if the cart refuses the product.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Cart` with the cart's reason (e.g. out of stock).
    #[instrument(skip(self, cart))]
    pub fn move_to_cart(
        &self,
        cart: &CartService<'_>,
        owner: &Email,
        product_id: ProductId,
    ) -> Result<Vec<CartLine>, WishlistError> {
        let lines = cart.add_to_cart(owner, product_id)?;
        self.remove(owner, product_id)?;
        Ok(lines)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::super::cart::tests::{owner, product, seeded_store};
    use super::*;
    use crate::config::PricingConfig;

    #[test]
    fn test_add_is_unique_by_product() {
        let store = seeded_store(&[product(1, Decimal::TEN, 3)]);
        let service = WishlistService::new(&store);

        assert!(service.add(&owner(), ProductId::new(1)).unwrap());
        assert!(!service.add(&owner(), ProductId::new(1)).unwrap());
        assert_eq!(service.items(&owner()).len(), 1);
        assert!(service.contains(&owner(), ProductId::new(1)));
    }

    #[test]
    fn test_add_unknown_product_fails() {
        let store = seeded_store(&[]);
        let service = WishlistService::new(&store);

        assert!(matches!(
            service.add(&owner(), ProductId::new(4)),
            Err(WishlistError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let store = seeded_store(&[product(1, Decimal::TEN, 3)]);
        let service = WishlistService::new(&store);
        service.add(&owner(), ProductId::new(1)).unwrap();

        assert!(service.remove(&owner(), ProductId::new(1)).unwrap());
        assert!(!service.remove(&owner(), ProductId::new(1)).unwrap());
        assert!(!service.contains(&owner(), ProductId::new(1)));
    }

    #[test]
    fn test_move_to_cart() {
        let store = seeded_store(&[product(1, Decimal::TEN, 3)]);
        let pricing = PricingConfig::default();
        let cart = CartService::new(&store, &pricing);
        let service = WishlistService::new(&store);
        service.add(&owner(), ProductId::new(1)).unwrap();

        let lines = service.move_to_cart(&cart, &owner(), ProductId::new(1)).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(service.items(&owner()).is_empty());
    }

    #[test]
    fn test_move_to_cart_keeps_item_when_out_of_stock() {
        let store = seeded_store(&[product(1, Decimal::TEN, 0)]);
        let pricing = PricingConfig::default();
        let cart = CartService::new(&store, &pricing);
        let service = WishlistService::new(&store);
        service.add(&owner(), ProductId::new(1)).unwrap();

        let result = service.move_to_cart(&cart, &owner(), ProductId::new(1));
        assert!(matches!(
            result,
            Err(WishlistError::Cart(CartError::OutOfStock { .. }))
        ));
        assert!(service.contains(&owner(), ProductId::new(1)));
        assert_eq!(cart.cart_count(&owner()), 0);
    }
}
