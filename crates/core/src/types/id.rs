//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`, `next()`
/// - `From<i64>` and `Into<i64>` implementations
///
/// IDs are `i64` because bulk-loaded records use millisecond timestamps as IDs.
///
/// # Example
///
/// ```rust
/// # use wighub_core::define_id;
/// define_id!(UserId);
/// define_id!(InvoiceId);
///
/// let user_id = UserId::new(1);
/// let invoice_id = InvoiceId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: UserId = invoice_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }

            /// The ID directly after this one.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(AccountId);
define_id!(AdminId);
define_id!(OrderId);

impl OrderId {
    /// Customer-facing order reference (e.g., `ORD-1718000000000`).
    #[must_use]
    pub fn reference(&self) -> String {
        format!("ORD-{}", self.0)
    }
}

/// Support ticket identifier.
///
/// Tickets are submitted anonymously, so they use random UUIDs rather than
/// sequential IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a fresh random ticket ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TicketId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_next_increments() {
        assert_eq!(ProductId::new(41).next(), ProductId::new(42));
        assert_eq!(AccountId::new(i64::MAX).next(), AccountId::new(i64::MAX));
    }

    #[test]
    fn test_serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: ProductId = serde_json::from_str("1718000000000").unwrap();
        assert_eq!(parsed.as_i64(), 1_718_000_000_000);
    }

    #[test]
    fn test_order_reference() {
        assert_eq!(OrderId::new(12).reference(), "ORD-12");
    }

    #[test]
    fn test_ticket_ids_are_unique() {
        assert_ne!(TicketId::generate(), TicketId::generate());
    }
}
