//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with absolute expiration.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// Type-erased value held by the cache.
pub type CachedValue = Arc<dyn Any + Send + Sync>;

// == Stored Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    /// The stored value
    pub value: CachedValue,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Absolute expiration timestamp
    pub expires_at: DateTime<Utc>,
}

impl StoredEntry {
    // == Constructor ==
    /// Creates a new entry expiring at the given absolute time.
    pub fn new(value: CachedValue, expires_at: DateTime<Utc>) -> Self {
        Self {
            value,
            created_at: Utc::now(),
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration time, so a zero TTL yields an entry that is dead on arrival.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining time to live, or zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        (self.expires_at - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

// == Utility Functions ==
/// Computes the absolute expiration `ttl` from now.
///
/// TTLs too large for the calendar saturate at the latest representable time.
pub fn expiry_after(ttl: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(ttl)
        .ok()
        .and_then(|delta| Utc::now().checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
