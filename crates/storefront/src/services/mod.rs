//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Customer signup, login and the session singleton
//! - `catalog` - Product listing, filtering and lookups
//! - `cart` - Cart edits, pricing and checkout
//! - `orders` - Customer order history
//! - `wishlist` - Saved products
//! - `support` - Contact form tickets
//!
//! Services borrow a `&dyn KeyValueStore` and are cheap to construct per call.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod support;
pub mod wishlist;

pub use auth::{AuthError, AuthService};
pub use cart::{CartError, CartService, CartSummary};
pub use catalog::{Catalog, CatalogService, ProductFilter};
pub use orders::OrderService;
pub use support::{SupportError, SupportService, TicketForm};
pub use wishlist::{WishlistError, WishlistService};
