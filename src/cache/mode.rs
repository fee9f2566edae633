//! Storage Mode Module
//!
//! Retention hint a cache is created with.

use serde::{Deserialize, Serialize};

// == Storage Mode ==
/// How strongly a cache holds on to its entries.
///
/// Both modes evict in LRU order when full. `Soft` caches may additionally
/// lose their least recently used entries early when the manager relieves
/// memory pressure. This is advisory and approximate; nothing is reclaimed
/// behind the cache's back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Entries leave only through LRU eviction or explicit removal
    #[default]
    Strong,
    /// Entries may also be shed under memory pressure
    Soft,
}

impl StorageMode {
    /// Maps the boolean `soft` flag callers commonly pass around.
    pub fn from_soft(soft: bool) -> Self {
        if soft {
            StorageMode::Soft
        } else {
            StorageMode::Strong
        }
    }

    /// Returns true for caches that may be shed under memory pressure.
    pub fn is_soft(self) -> bool {
        self == StorageMode::Soft
    }
}
