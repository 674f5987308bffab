// SPDX-License-Identifier: MPL-2.0
//! Notification keys.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of keys. Never reset, so a key is never handed out twice.
static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a notification.
///
/// Keys come from a monotonic counter rather than the clock: two
/// notifications requested within the same millisecond still get distinct
/// keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationKey(u64);

impl NotificationKey {
    /// Creates a new unique notification key.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a raw value without consuming the counter.
    ///
    /// Only useful to refer to keys that were printed or stored elsewhere;
    /// the manager never registers a key built this way.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let k1 = NotificationKey::next();
        let k2 = NotificationKey::next();
        assert_ne!(k1, k2);
    }

    #[test]
    fn keys_generated_in_a_burst_are_pairwise_distinct() {
        let keys: HashSet<_> = (0..10_000).map(|_| NotificationKey::next()).collect();
        assert_eq!(keys.len(), 10_000);
    }

    #[test]
    fn keys_increase_monotonically() {
        let first = NotificationKey::next();
        let second = NotificationKey::next();
        assert!(second > first);
    }

    #[test]
    fn from_raw_round_trips_value() {
        assert_eq!(NotificationKey::from_raw(7).value(), 7);
        assert_eq!(NotificationKey::from_raw(7).to_string(), "7");
    }
}
