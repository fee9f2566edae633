//! Cache Summary Model
//!
//! Point-in-time description of a registered cache.

use serde::Serialize;

use crate::cache::StorageMode;

/// Snapshot of one registered cache, suitable for diagnostics output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSummary {
    /// Registered name
    pub name: String,
    /// Storage mode fixed at creation
    pub storage_mode: StorageMode,
    /// Entries resident when the snapshot was taken
    pub len: usize,
    /// Maximum number of entries
    pub capacity: usize,
}
