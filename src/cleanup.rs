//! Background sweep of expired in-memory fields.
//!
//! Expired entries already read as absent; the sweep only reclaims memory
//! for fields nobody reads again. Redis expires its own keys.

use crate::storage::MemoryFieldStore;
use std::time::Duration;

/// Run the sweep loop.
///
/// Purges expired entries from `store` every `interval`.
pub async fn run_sweep_loop(store: MemoryFieldStore, interval: Duration) {
    loop {
        tokio::time::sleep(interval).await;
        sweep_once(&store);
    }
}

/// Purge expired entries once. Returns how many were dropped.
pub fn sweep_once(store: &MemoryFieldStore) -> usize {
    let purged = store.purge_expired();
    if purged > 0 {
        tracing::info!(purged, remaining = store.len(), "Expired fields swept");
    }
    purged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FieldStore;

    #[tokio::test]
    async fn test_sweep_once() {
        let store = MemoryFieldStore::new();
        store.set("auth_token", "t", Duration::ZERO).await.unwrap();
        store.set("user_data", "{}", Duration::ZERO).await.unwrap();
        store
            .set("other", "v", Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(sweep_once(&store), 2);
        assert_eq!(sweep_once(&store), 0);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_loop_runs_on_interval() {
        let store = MemoryFieldStore::new();
        store.set("auth_token", "t", Duration::ZERO).await.unwrap();

        let handle = tokio::spawn(run_sweep_loop(store.clone(), Duration::from_secs(60)));
        tokio::time::sleep(Duration::from_secs(61)).await;
        assert!(store.is_empty());
        handle.abort();
    }
}
