//! Cache Module
//!
//! Typed cache facade over a concurrent in-memory store with absolute expiration.

mod entry;
mod manager;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::{expiry_after, CachedValue, StoredEntry};
pub use manager::CacheManager;
pub use stats::CacheStats;
pub use store::{ExpiringStore, MemoryStore};

// == Public Constants ==
/// Expiration applied when the caller does not supply one
pub const DEFAULT_TTL: Duration = Duration::from_secs(crate::config::DEFAULT_TTL_SECS);
