//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the cache.
//!
//! # Tasks
//! - Expiration sweep: Removes expired entries from a `MemoryStore` at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
