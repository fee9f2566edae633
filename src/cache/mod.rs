//! Cache Module
//!
//! Provides bounded in-memory caching with LRU eviction.

mod handle;
mod lru;
mod mode;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use handle::Cache;
pub use lru::LruTracker;
pub use mode::StorageMode;
pub use store::LruStore;
