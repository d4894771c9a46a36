//! Cache data structures with TTL support

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// A cached value and the moment it was stored
#[derive(Debug)]
pub struct CacheEntry<V> {
    pub value: Arc<V>,
    pub stored_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Creates a new entry stamped with the current time
    pub fn new(value: Arc<V>) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    /// Age of the entry
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }

    /// An entry is fresh while its age is strictly below the TTL
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }

    /// Remaining time until the entry goes stale
    pub fn time_until_stale(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.age())
    }
}

/// Snapshot of a cache for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub fresh: usize,
    pub stale: usize,
    pub ttl: Duration,
}
