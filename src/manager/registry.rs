//! Cache Registry
//!
//! Named-cache registry with create-once, identity-stable semantics.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::cache::{Cache, StorageMode};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::manager::CacheSummary;

// == Erased Cache ==
/// Type-independent view of a registered cache, used for manager-wide operations.
trait ErasedCache: Send + Sync {
    fn summary(&self) -> CacheSummary;
    fn shed(&self, retain_percent: u8) -> usize;
    fn clear(&self);
}

impl<K, V> ErasedCache for Cache<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    fn summary(&self) -> CacheSummary {
        CacheSummary {
            name: self.name().to_string(),
            storage_mode: self.storage_mode(),
            len: self.len(),
            capacity: self.capacity(),
        }
    }

    fn shed(&self, retain_percent: u8) -> usize {
        Cache::shed(self, retain_percent)
    }

    fn clear(&self) {
        Cache::clear(self)
    }
}

/// One registry slot. Both handles point at the same allocation.
struct Registered {
    mode: StorageMode,
    erased: Arc<dyn ErasedCache>,
    typed: Arc<dyn Any + Send + Sync>,
}

// == LRU Cache Manager ==
/// Hands out named [`Cache`]s, creating each one on first request.
///
/// Every cache gets the per-cache capacity fixed when the manager is built.
/// Repeated requests for a name return the same `Arc`, whatever storage mode
/// they ask for. Share the manager itself behind an `Arc`.
pub struct LruCacheManager {
    capacity: usize,
    caches: RwLock<HashMap<String, Registered>>,
}

impl LruCacheManager {
    // == Constructor ==
    /// Creates a manager whose caches hold at most `capacity_per_cache` entries.
    pub fn new(capacity_per_cache: usize) -> Result<Self> {
        if capacity_per_cache == 0 {
            return Err(CacheError::InvalidArgument(
                "capacity per cache must be a positive integer".to_string(),
            ));
        }

        info!(capacity_per_cache, "Cache manager created");
        Ok(Self {
            capacity: capacity_per_cache,
            caches: RwLock::new(HashMap::new()),
        })
    }

    /// Creates a manager from a validated [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity_per_cache)
    }

    // Slots are only inserted whole, so a poisoned lock still guards a valid map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Registered>> {
        self.caches.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Registered>> {
        self.caches.write().unwrap_or_else(PoisonError::into_inner)
    }

    // == Get Cache ==
    /// Returns the cache registered under `name`, creating a strong one if needed.
    pub fn get_cache<K, V>(&self, name: &str) -> Result<Arc<Cache<K, V>>>
    where
        K: Eq + Hash + Clone + Send + 'static,
        V: Clone + Send + 'static,
    {
        self.get_cache_with_mode(name, StorageMode::Strong)
    }

    /// Returns the cache registered under `name`, creating it with `mode` if needed.
    ///
    /// When the cache already exists with another storage mode, the original
    /// cache is returned unchanged and a configuration conflict is logged.
    /// Fails only when `name` is registered with different key/value types.
    pub fn get_cache_with_mode<K, V>(
        &self,
        name: &str,
        mode: StorageMode,
    ) -> Result<Arc<Cache<K, V>>>
    where
        K: Eq + Hash + Clone + Send + 'static,
        V: Clone + Send + 'static,
    {
        if let Some(slot) = self.read().get(name) {
            return reuse(name, slot, mode);
        }

        let mut caches = self.write();
        // Another caller may have created it between the two locks
        if let Some(slot) = caches.get(name) {
            return reuse(name, slot, mode);
        }

        let cache = Arc::new(Cache::<K, V>::new(name, self.capacity, mode));
        caches.insert(
            name.to_string(),
            Registered {
                mode,
                erased: cache.clone(),
                typed: cache.clone(),
            },
        );

        info!(cache = name, ?mode, capacity = self.capacity, "Cache created");
        Ok(cache)
    }

    // == Relieve Pressure ==
    /// Sheds every soft cache down to `retain_percent` of its capacity.
    ///
    /// Strong caches are left alone. Returns the total number of entries evicted.
    pub fn relieve_pressure(&self, retain_percent: u8) -> usize {
        let soft: Vec<Arc<dyn ErasedCache>> = self
            .read()
            .values()
            .filter(|slot| slot.mode.is_soft())
            .map(|slot| Arc::clone(&slot.erased))
            .collect();

        let shed: usize = soft.iter().map(|cache| cache.shed(retain_percent)).sum();
        debug!(caches = soft.len(), shed, "Relieved memory pressure");
        shed
    }

    /// Empties every cache. Names stay registered and handles stay valid.
    pub fn clear_all(&self) {
        for slot in self.read().values() {
            slot.erased.clear();
        }
    }

    /// Describes every registered cache, ordered by name.
    pub fn describe(&self) -> Vec<CacheSummary> {
        let mut summaries: Vec<CacheSummary> =
            self.read().values().map(|slot| slot.erased.summary()).collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    /// Registered cache names, sorted.
    pub fn cache_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns true when a cache is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Number of registered caches.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true before the first cache is created.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Entry bound applied to every cache this manager creates.
    pub fn capacity_per_cache(&self) -> usize {
        self.capacity
    }
}

impl fmt::Debug for LruCacheManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheManager")
            .field("capacity", &self.capacity)
            .field("caches", &self.cache_names())
            .finish()
    }
}

fn reuse<K, V>(name: &str, slot: &Registered, requested: StorageMode) -> Result<Arc<Cache<K, V>>>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    let cache = Arc::clone(&slot.typed)
        .downcast::<Cache<K, V>>()
        .map_err(|_| CacheError::TypeMismatch(name.to_string()))?;

    if slot.mode != requested {
        let conflict = CacheError::ConfigurationConflict {
            name: name.to_string(),
            existing: slot.mode,
            requested,
        };
        warn!(cache = name, "{}", conflict);
    }

    Ok(cache)
}
