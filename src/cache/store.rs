//! Cache Store Module
//!
//! The keyed storage contract the facade delegates to, and the default
//! concurrent lazy-expiry implementation backed by DashMap.

use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheStats, CachedValue, StoredEntry};

// == Expiring Store ==
/// Keyed storage with absolute per-entry expiration.
///
/// Implementations own all synchronization: every method takes `&self` and
/// may be called from any number of threads at once.
pub trait ExpiringStore: Send + Sync {
    /// Inserts `value` under `key`, replacing any previous entry.
    fn insert(&self, key: String, value: CachedValue, expires_at: DateTime<Utc>);

    /// Returns the value if a live entry exists.
    fn lookup(&self, key: &str) -> Option<CachedValue>;

    /// Removes the entry if present.
    fn remove(&self, key: &str);

    /// Returns whether a live entry exists.
    fn contains(&self, key: &str) -> bool;

    /// Enumerates the keys currently held.
    fn keys(&self) -> Vec<String>;
}

// == Memory Store ==
/// In-memory store with lazy expiration on access plus an explicit purge.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: DashMap<String, StoredEntry>,
    /// Performance counters
    stats: StatsCounters,
}

impl MemoryStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Live Value ==
    /// Returns the value of a live entry, dropping the entry if it has expired.
    fn live_value(&self, key: &str) -> Option<CachedValue> {
        let live = self
            .entries
            .get(key)
            .and_then(|entry| (!entry.is_expired()).then(|| entry.value.clone()));

        if live.is_none() {
            self.remove_if_expired(key);
        }
        live
    }

    /// Removes the entry only if it is still expired, so a concurrent
    /// overwrite is never lost.
    fn remove_if_expired(&self, key: &str) {
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired())
            .is_some()
        {
            self.stats.record_expirations(1);
        }
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut removed = 0;

        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired_at(now);
            if !keep {
                removed += 1;
            }
            keep
        });

        self.stats.record_expirations(removed);
        removed
    }

    // == Time To Live ==
    /// Returns the remaining time to live of a live entry.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.ttl_remaining())
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the number of entries held, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ExpiringStore for MemoryStore {
    fn insert(&self, key: String, value: CachedValue, expires_at: DateTime<Utc>) {
        self.entries.insert(key, StoredEntry::new(value, expires_at));
    }

    fn lookup(&self, key: &str) -> Option<CachedValue> {
        let value = self.live_value(key);
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    fn contains(&self, key: &str) -> bool {
        self.live_value(key).is_some()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::entry::expiry_after;
    use chrono::TimeDelta;
    use std::sync::Arc;
    use std::thread::sleep;

    fn text(s: &str) -> CachedValue {
        Arc::new(s.to_string())
    }

    fn as_text(value: Option<CachedValue>) -> Option<String> {
        value.and_then(|v| v.downcast_ref::<String>().cloned())
    }

    #[test]
    fn test_store_new() {
        let store = MemoryStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_insert_and_lookup() {
        let store = MemoryStore::new();

        store.insert("key1".to_string(), text("value1"), expiry_after(Duration::from_secs(60)));

        assert_eq!(as_text(store.lookup("key1")), Some("value1".to_string()));
        assert!(store.contains("key1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lookup_nonexistent() {
        let store = MemoryStore::new();
        assert!(store.lookup("nonexistent").is_none());
        assert!(!store.contains("nonexistent"));
    }

    #[test]
    fn test_store_overwrite() {
        let store = MemoryStore::new();
        let expires_at = expiry_after(Duration::from_secs(60));

        store.insert("key1".to_string(), text("value1"), expires_at);
        store.insert("key1".to_string(), text("value2"), expires_at);

        assert_eq!(as_text(store.lookup("key1")), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_remove_is_idempotent() {
        let store = MemoryStore::new();

        store.insert("key1".to_string(), text("value1"), expiry_after(Duration::from_secs(60)));
        store.remove("key1");
        store.remove("key1");

        assert!(store.is_empty());
        assert!(store.lookup("key1").is_none());
    }

    #[test]
    fn test_store_lazy_expiration() {
        let store = MemoryStore::new();

        store.insert("key1".to_string(), text("value1"), expiry_after(Duration::from_millis(100)));
        assert!(store.contains("key1"));

        sleep(Duration::from_millis(150));

        // Still physically present until touched
        assert_eq!(store.len(), 1);
        assert!(store.lookup("key1").is_none());
        assert_eq!(store.len(), 0);
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_contains_drops_expired() {
        let store = MemoryStore::new();
        let past = Utc::now() - TimeDelta::seconds(1);

        store.insert("key1".to_string(), text("value1"), past);

        assert!(!store.contains("key1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_purge_expired() {
        let store = MemoryStore::new();

        store.insert("key1".to_string(), text("value1"), expiry_after(Duration::ZERO));
        store.insert("key2".to_string(), text("value2"), expiry_after(Duration::from_secs(10)));

        let removed = store.purge_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.contains("key2"));
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_keys() {
        let store = MemoryStore::new();
        let expires_at = expiry_after(Duration::from_secs(60));

        store.insert("a".to_string(), text("1"), expires_at);
        store.insert("b".to_string(), text("2"), expires_at);

        let mut keys = store.keys();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_store_ttl_remaining() {
        let store = MemoryStore::new();

        store.insert("key1".to_string(), text("value1"), expiry_after(Duration::from_secs(10)));
        store.insert("dead".to_string(), text("value2"), expiry_after(Duration::ZERO));

        let remaining = store.ttl_remaining("key1").unwrap();
        assert!(remaining <= Duration::from_secs(10));
        assert!(remaining >= Duration::from_secs(9));
        assert!(store.ttl_remaining("dead").is_none());
        assert!(store.ttl_remaining("missing").is_none());
    }

    #[test]
    fn test_store_stats() {
        let store = MemoryStore::new();

        store.insert("key1".to_string(), text("value1"), expiry_after(Duration::from_secs(60)));
        store.lookup("key1"); // hit
        store.lookup("nonexistent"); // miss
        store.contains("key1"); // not counted

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
