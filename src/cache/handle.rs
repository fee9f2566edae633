//! Cache Handle Module
//!
//! Thread-safe named cache shared between callers through an `Arc`.

use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::cache::{LruStore, StorageMode};
use crate::error::{CacheError, Result};

// == Cache ==
/// Bounded key-value cache with LRU eviction.
///
/// Obtained from [`LruCacheManager`](crate::LruCacheManager), never built by
/// callers. Every operation locks the whole store, so operations on one
/// cache are linearizable and `len()` never exceeds `capacity()`.
#[derive(Debug)]
pub struct Cache<K, V> {
    name: String,
    mode: StorageMode,
    store: Mutex<LruStore<K, V>>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub(crate) fn new(name: impl Into<String>, capacity: usize, mode: StorageMode) -> Self {
        Self {
            name: name.into(),
            mode,
            store: Mutex::new(LruStore::new(capacity)),
        }
    }

    // A panic inside a store operation cannot leave the map and the tracker
    // out of step, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, LruStore<K, V>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Put ==
    /// Inserts or overwrites `key`, evicting the least recently used entry
    /// when an absent key arrives at a full cache.
    ///
    /// Returns the value previously stored under `key`.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let (previous, evicted) = self.lock().put(key, value);
        if evicted.is_some() {
            debug!(cache = %self.name, "Evicted least recently used entry");
        }
        previous
    }

    // == Try Put ==
    /// Like [`put`](Self::put) for inputs that may be missing.
    ///
    /// A `None` key or value is rejected with `InvalidArgument` and the
    /// cache is left unchanged.
    pub fn try_put(&self, key: Option<K>, value: Option<V>) -> Result<Option<V>> {
        let key = key.ok_or_else(|| {
            CacheError::InvalidArgument(format!("cache '{}': key must not be null", self.name))
        })?;
        let value = value.ok_or_else(|| {
            CacheError::InvalidArgument(format!("cache '{}': value must not be null", self.name))
        })?;
        Ok(self.put(key, value))
    }

    // == Get ==
    /// Returns a clone of the value for `key`, marking it most recently used.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key)
    }

    /// Presence check that does not count as an access.
    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains(key)
    }

    // == Remove ==
    /// Removes `key` if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.lock().remove(key)
    }

    /// Removes all entries and resets recency order.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Maximum number of entries, fixed at creation.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Name the cache is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage mode fixed at creation.
    pub fn storage_mode(&self) -> StorageMode {
        self.mode
    }

    // == Shed ==
    /// Evicts least recently used entries until at most `retain_percent`
    /// of the capacity is in use. Returns the number evicted.
    pub fn shed(&self, retain_percent: u8) -> usize {
        let mut store = self.lock();
        let target = retained_entries(store.capacity(), retain_percent);
        store.shrink_to(target)
    }
}

/// `capacity * retain_percent / 100`, rounded down, without overflowing.
fn retained_entries(capacity: usize, retain_percent: u8) -> usize {
    let percent = usize::from(retain_percent.min(100));
    capacity / 100 * percent + capacity % 100 * percent / 100
}
