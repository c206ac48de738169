//! Order ID sequence.

use chrono::{DateTime, Utc};
use wighub_core::OrderId;

use super::{RepositoryError, read_json, write_json};
use crate::backend::KeyValueStore;
use crate::keys;

/// Issues strictly increasing order IDs.
///
/// IDs are millisecond timestamps, bumped past the last issued ID when the
/// clock has not advanced (or went backwards), so two checkouts in the same
/// millisecond still get distinct IDs.
pub struct OrderSequence<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> OrderSequence<'a> {
    /// Create a sequence over `store`.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Reserve and persist the next order ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the sequence cannot be read or written.
    pub fn next_id(&self, now: DateTime<Utc>) -> Result<OrderId, RepositoryError> {
        let last: Option<OrderId> = read_json(self.store, keys::ORDER_SEQUENCE)?;
        let candidate = OrderId::new(now.timestamp_millis());
        let id = match last {
            Some(last) if last >= candidate => last.next(),
            _ => candidate,
        };
        write_json(self.store, keys::ORDER_SEQUENCE, &id)?;
        Ok(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::backend::MemoryStore;

    #[test]
    fn test_same_millisecond_never_collides() {
        let store = MemoryStore::new();
        let sequence = OrderSequence::new(&store);
        let now = Utc.timestamp_millis_opt(1_718_000_000_000).unwrap();

        let first = sequence.next_id(now).unwrap();
        let second = sequence.next_id(now).unwrap();
        let third = sequence.next_id(now).unwrap();

        assert_eq!(first.as_i64(), 1_718_000_000_000);
        assert_eq!(second.as_i64(), 1_718_000_000_001);
        assert_eq!(third.as_i64(), 1_718_000_000_002);
    }

    #[test]
    fn test_clock_going_backwards_still_increases() {
        let store = MemoryStore::new();
        let sequence = OrderSequence::new(&store);
        let later = Utc.timestamp_millis_opt(2_000).unwrap();
        let earlier = Utc.timestamp_millis_opt(1_000).unwrap();

        let first = sequence.next_id(later).unwrap();
        let second = sequence.next_id(earlier).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_follows_clock_when_it_moves_ahead() {
        let store = MemoryStore::new();
        let sequence = OrderSequence::new(&store);
        sequence.next_id(Utc.timestamp_millis_opt(1_000).unwrap()).unwrap();
        let id = sequence
            .next_id(Utc.timestamp_millis_opt(5_000).unwrap())
            .unwrap();
        assert_eq!(id.as_i64(), 5_000);
    }
}
