//! Behavior of the TTL cache through its public API

use gridiron_feed::TtlCache;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_stale_entry_indistinguishable_from_absent() {
    let cache: TtlCache<&str> = TtlCache::new("words", Duration::from_secs(60));
    cache.put("key", "old").await;

    tokio::time::advance(Duration::from_secs(60)).await;
    assert!(cache.get("key").await.is_none());
    assert!(cache.get("missing").await.is_none());

    // Stale entries stay until replaced
    let stats = cache.stats().await;
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.stale, 1);
}

#[tokio::test(start_paused = true)]
async fn test_put_replaces_rather_than_merges() {
    let cache: TtlCache<Vec<&str>> = TtlCache::new("lists", Duration::from_secs(60));
    cache.put("key", vec!["a", "b"]).await;
    cache.put("key", vec!["c"]).await;

    assert_eq!(*cache.get("key").await.unwrap(), vec!["c"]);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_replacing_stale_entry_restores_freshness() {
    let cache: TtlCache<u8> = TtlCache::new("bytes", Duration::from_secs(10));
    cache.put("key", 1).await;
    tokio::time::advance(Duration::from_secs(15)).await;
    assert!(cache.get("key").await.is_none());

    cache.put("key", 2).await;
    assert_eq!(cache.get("key").await.as_deref(), Some(&2));
}
