//! Store key layout.
//!
//! | Key | Value |
//! |---|---|
//! | `products` | `[Product]` |
//! | `clients` | `[Account]` |
//! | `admins` | `[Admin]` |
//! | `cart_<email>` | `[CartLine]` |
//! | `wishlist_<email>` | `[ProductSnapshot]` |
//! | `orders_<email>` | `[Order]`, newest first |
//! | `support_tickets` | `[Ticket]` |
//! | `session_token` / `session_user` | customer session |
//! | `admin_session` | admin session |
//! | `order_sequence` | last issued order ID |
//!
//! `<email>` is always the lowercase form of the account email. Bytes outside
//! `[a-z0-9_.@+-]` are written as `%XX`, so every address that parses as an
//! [`Email`] yields a key any backend accepts.

use std::fmt::Write;

use wighub_core::Email;

pub const PRODUCTS: &str = "products";
pub const CLIENTS: &str = "clients";
pub const ADMINS: &str = "admins";
pub const SUPPORT_TICKETS: &str = "support_tickets";
pub const SESSION_TOKEN: &str = "session_token";
pub const SESSION_USER: &str = "session_user";
pub const ADMIN_SESSION: &str = "admin_session";
pub const ORDER_SEQUENCE: &str = "order_sequence";

/// Key of the cart owned by `email`.
#[must_use]
pub fn cart(email: &Email) -> String {
    format!("cart_{}", escape(email))
}

/// Key of the wishlist owned by `email`.
#[must_use]
pub fn wishlist(email: &Email) -> String {
    format!("wishlist_{}", escape(email))
}

/// Key of the order history owned by `email`.
#[must_use]
pub fn orders(email: &Email) -> String {
    format!("orders_{}", escape(email))
}

fn escape(email: &Email) -> String {
    let normalized = email.normalized();
    let mut escaped = String::with_capacity(normalized.len());
    for byte in normalized.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'@' | b'+' | b'-') {
            escaped.push(char::from(byte));
        } else {
            let _ = write!(escaped, "%{byte:02X}");
        }
    }
    escaped
}
