//! Cache Manager - A typed in-process cache
//!
//! Provides add/get/remove/contains/clear over arbitrary value types with
//! per-entry absolute expiration, backed by a concurrent in-memory store.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheManager, CacheStats, ExpiringStore, MemoryStore};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
