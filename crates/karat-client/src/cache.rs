//! Request-scoped query cache with staleness and retention windows.
//!
//! Honours the caching contract the frontend's query hooks relied on:
//! a hit younger than the staleness window answers without a network call,
//! concurrent identical queries coalesce into one in-flight request, and
//! entries older than the retention window are dropped. Errors are never
//! cached — the next call for that key retries.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

struct CachedValue<T> {
    fetched_at: Instant,
    value: T,
}

/// A per-key cache of query results.
///
/// Each key owns a slot whose lock is held across the fetch, so a second
/// caller for the same key waits for the first fetch and then reads the
/// fresh value instead of issuing its own request.
pub struct QueryCache<T> {
    stale_after: Duration,
    retain_for: Duration,
    slots: Mutex<HashMap<String, Arc<Mutex<Option<CachedValue<T>>>>>>,
}

impl<T: Clone> QueryCache<T> {
    #[must_use]
    pub fn new(stale_after: Duration, retain_for: Duration) -> Self {
        Self {
            stale_after,
            retain_for,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key` if it is younger than the
    /// staleness window, otherwise runs `fetch` and caches its result.
    ///
    /// # Errors
    ///
    /// Propagates whatever `fetch` returns; a failed fetch leaves the slot
    /// unchanged (a previous stale value is kept for the retention window,
    /// but is no longer served).
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let slot = {
            let mut slots = self.slots.lock().await;
            Self::prune(&mut slots, self.retain_for);
            Arc::clone(slots.entry(key.to_owned()).or_default())
        };

        let mut guard = slot.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.fetched_at.elapsed() <= self.stale_after {
                tracing::debug!(key, "query cache hit");
                return Ok(cached.value.clone());
            }
        }

        let value = fetch().await?;
        *guard = Some(CachedValue {
            fetched_at: Instant::now(),
            value: value.clone(),
        });
        Ok(value)
    }

    /// Drops slots whose value has outlived the retention window. Slots with
    /// an in-flight fetch (locked) are left alone.
    fn prune(slots: &mut HashMap<String, Arc<Mutex<Option<CachedValue<T>>>>>, retain_for: Duration) {
        slots.retain(|_, slot| match slot.try_lock() {
            Ok(guard) => guard
                .as_ref()
                .is_none_or(|cached| cached.fetched_at.elapsed() <= retain_for),
            Err(_) => true,
        });
    }

    #[cfg(test)]
    async fn slot_count(&self) -> usize {
        self.slots.lock().await.len()
    }
}
