//! Expiration Sweep Task
//!
//! Background task that periodically removes expired entries so that keys
//! nobody reads again still release their memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryStore;

/// Spawns a background task that periodically purges expired entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between sweeps.
/// Lookups already hide expired entries, so the sweep only affects memory use,
/// never what callers observe.
///
/// # Arguments
/// * `store` - Shared reference to the store to sweep
/// * `interval` - Time between sweeps (clamped to at least one millisecond)
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
///
/// # Example
/// ```ignore
/// let cache = CacheManager::from_config(&config);
/// let sweep_handle = spawn_sweep_task(cache.store().clone(), config.sweep_interval());
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(store: Arc<MemoryStore>, interval: Duration) -> JoinHandle<()> {
    let interval = interval.max(Duration::from_millis(1));

    tokio::spawn(async move {
        info!(
            "Starting expiration sweep task with interval of {}ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.purge_expired();

            if removed > 0 {
                info!("Expiration sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiration sweep: no expired entries found");
            }
        }
    })
}
