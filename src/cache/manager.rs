//! Cache Manager Module
//!
//! Typed facade over an [`ExpiringStore`]: validates keys, resolves the
//! expiration of each entry and recovers the caller's type on retrieval.

use std::any::{type_name, Any};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::cache::entry::expiry_after;
use crate::cache::{ExpiringStore, MemoryStore, DEFAULT_TTL};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache Manager ==
/// Typed cache facade.
///
/// Holds no state besides a shared handle to the store and the default TTL,
/// so clones are cheap and all observe the same entries. Construct one per
/// process and hand it to whatever needs caching.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use cache_manager::CacheManager;
///
/// let cache = CacheManager::in_memory();
/// cache.add_or_update("answer", 42u32, Some(Duration::from_secs(30))).unwrap();
/// assert_eq!(cache.get::<u32>("answer").unwrap(), 42);
/// ```
#[derive(Debug)]
pub struct CacheManager<S = MemoryStore> {
    store: Arc<S>,
    default_ttl: Duration,
}

impl<S> Clone for CacheManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            default_ttl: self.default_ttl,
        }
    }
}

impl CacheManager<MemoryStore> {
    /// Creates a manager over a fresh [`MemoryStore`] with the 10 minute default TTL.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Creates a manager over a fresh [`MemoryStore`] using the configured default TTL.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_default_ttl(Arc::new(MemoryStore::new()), config.default_ttl())
    }
}

impl Default for CacheManager<MemoryStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: ExpiringStore> CacheManager<S> {
    // == Constructors ==
    /// Creates a manager over `store` with the 10 minute default TTL.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_default_ttl(store, DEFAULT_TTL)
    }

    pub fn with_default_ttl(store: Arc<S>, default_ttl: Duration) -> Self {
        Self { store, default_ttl }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Add Or Update ==
    /// Adds or replaces the entry for `key`.
    ///
    /// The entry expires at now + `expiration`, or now + the default TTL when
    /// `expiration` is `None`. A zero expiration stores an already-dead entry.
    ///
    /// # Errors
    /// `InvalidArgument` if `key` is empty; nothing is stored in that case.
    pub fn add_or_update<T>(&self, key: &str, value: T, expiration: Option<Duration>) -> Result<()>
    where
        T: Any + Send + Sync,
    {
        validate_key(key)?;
        let ttl = expiration.unwrap_or(self.default_ttl);
        self.store.insert(key.to_string(), Arc::new(value), expiry_after(ttl));
        trace!(key, ttl_ms = ttl.as_millis() as u64, "cache entry stored");
        Ok(())
    }

    /// Adds or replaces the entry for `key`, expiring at the absolute time `expires_at`.
    ///
    /// A time in the past stores an already-dead entry.
    pub fn add_or_update_until<T>(&self, key: &str, value: T, expires_at: DateTime<Utc>) -> Result<()>
    where
        T: Any + Send + Sync,
    {
        validate_key(key)?;
        self.store.insert(key.to_string(), Arc::new(value), expires_at);
        trace!(key, %expires_at, "cache entry stored");
        Ok(())
    }

    // == Get ==
    /// Returns a clone of the value stored under `key`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `key` is empty
    /// - `NotFound` if no live entry exists
    /// - `TypeMismatch` if the entry holds something other than a `T`
    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: Any + Send + Sync + Clone,
    {
        self.get_shared::<T>(key).map(|value| T::clone(&value))
    }

    /// Returns the shared value stored under `key` without cloning it.
    pub fn get_shared<T>(&self, key: &str) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        validate_key(key)?;
        let value = self
            .store
            .lookup(key)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;

        value.downcast::<T>().map_err(|_| CacheError::TypeMismatch {
            key: key.to_string(),
            expected: type_name::<T>(),
        })
    }

    // == Remove ==
    /// Removes the entry for `key`. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.store.remove(key);
        Ok(())
    }

    // == Contains ==
    /// Returns whether a live entry exists for `key`.
    pub fn contains(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.store.contains(key))
    }

    // == Clear ==
    /// Removes every entry currently in the cache.
    ///
    /// Keys are enumerated first and then removed one at a time, so the clear
    /// is not atomic: entries inserted by other callers while it runs may survive.
    pub fn clear(&self) {
        let keys = self.store.keys();
        let count = keys.len();
        for key in keys {
            self.store.remove(&key);
        }
        debug!(removed = count, "cache cleared");
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::empty_key());
    }
    Ok(())
}
