//! Records persisted as JSON documents in the store.
//!
//! Field names serialize in camelCase and money values as decimal strings, so
//! documents written by older browser builds (`productType`, `createdAt`, ...)
//! load unchanged.

pub mod account;
pub mod cart;
pub mod order;
pub mod product;
pub mod session;
pub mod ticket;

pub use account::{Account, Admin};
pub use cart::{CartLine, Totals};
pub use order::{CustomerSnapshot, Order, ShippingDetails};
pub use product::{Product, ProductSnapshot};
pub use session::{AdminSession, Session, SessionToken, SessionUser};
pub use ticket::Ticket;
