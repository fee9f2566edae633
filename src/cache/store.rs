//! LRU Store Module
//!
//! Single-threaded cache engine combining HashMap storage with LRU tracking.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::LruTracker;

// == LRU Store ==
/// Bounded key-value storage with LRU eviction.
///
/// Not synchronized; [`Cache`](crate::cache::Cache) wraps it in a mutex.
#[derive(Debug)]
pub struct LruStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// LRU access tracker
    lru: LruTracker<K>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V: Clone> LruStore<K, V> {
    // == Constructor ==
    /// Creates a new store holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            capacity,
        }
    }

    // == Put ==
    /// Stores a key-value pair and marks the key most recently used.
    ///
    /// An absent key on a full store first evicts the least recently used
    /// entry. Returns the previous value when `key` was overwritten, and the
    /// evicted key, if any.
    pub fn put(&mut self, key: K, value: V) -> (Option<V>, Option<K>) {
        let mut evicted = None;

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            if let Some(oldest) = self.lru.evict_oldest() {
                self.entries.remove(&oldest);
                evicted = Some(oldest);
            }
        }

        self.lru.touch(&key);
        let previous = self.entries.insert(key, value);
        (previous, evicted)
    }

    // == Get ==
    /// Retrieves a value by key, marking it most recently used on a hit.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let value = self.entries.get(key)?.clone();
        self.lru.touch(key);
        Some(value)
    }

    /// Presence check that leaves recency untouched.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Remove ==
    /// Removes an entry by key. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.entries.remove(key)?;
        self.lru.remove(key);
        Some(value)
    }

    // == Shrink ==
    /// Evicts least recently used entries until at most `target` remain.
    ///
    /// Returns the number of entries evicted.
    pub fn shrink_to(&mut self, target: usize) -> usize {
        let mut evicted = 0;
        while self.entries.len() > target {
            match self.lru.evict_oldest() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                    evicted += 1;
                }
                None => break,
            }
        }
        evicted
    }

    /// Removes all entries and resets recency order.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries allowed.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
