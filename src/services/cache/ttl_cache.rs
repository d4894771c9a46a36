use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::types::{CacheEntry, CacheStats};

/// String-keyed cache whose entries are ignored once older than the TTL.
///
/// Entries are replaced on `put`, never merged, and never evicted: a stale
/// entry stays in the map until overwritten or `clear` is called. There is no
/// size bound and no coalescing of concurrent misses.
#[derive(Debug)]
pub struct TtlCache<V> {
    name: &'static str,
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V> TtlCache<V> {
    pub fn new(name: &'static str, ttl: Duration) -> Self {
        Self {
            name,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the stored value if it is still fresh
    #[instrument(skip(self), fields(cache = self.name))]
    pub async fn get(&self, key: &str) -> Option<Arc<V>> {
        let entries = self.entries.read().await;

        match entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl) => {
                debug!("Cache hit: key={}, age={:?}", key, entry.age());
                Some(Arc::clone(&entry.value))
            }
            Some(entry) => {
                debug!(
                    "Ignoring stale cache entry: key={}, age={:?}, ttl={:?}",
                    key,
                    entry.age(),
                    self.ttl
                );
                None
            }
            None => {
                debug!("Cache miss: key={}", key);
                None
            }
        }
    }

    /// Stores a value, replacing any previous entry for the key.
    /// Returns the shared handle that later hits will hand out.
    #[instrument(skip(self, key, value), fields(cache = self.name))]
    pub async fn put(&self, key: impl Into<String>, value: V) -> Arc<V> {
        let key = key.into();
        let value = Arc::new(value);
        let mut entries = self.entries.write().await;
        entries.insert(key.clone(), CacheEntry::new(Arc::clone(&value)));
        debug!("Cached value: key={}, entries={}", key, entries.len());
        value
    }

    /// Number of entries, stale ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops every entry
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Counts fresh and stale entries for monitoring
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        let fresh = entries
            .values()
            .filter(|entry| entry.is_fresh(self.ttl))
            .count();
        CacheStats {
            entries: entries.len(),
            fresh,
            stale: entries.len() - fresh,
            ttl: self.ttl,
        }
    }
}
