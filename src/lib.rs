//! LRU Cache Manager - Named, bounded in-memory caches
//!
//! Memoizes expensive lookups behind caches acquired by name from an
//! explicitly constructed [`LruCacheManager`]. Each cache evicts its least
//! recently used entry when full and is safe to share between threads.
//!
//! ```
//! use lru_cache_manager::{LruCacheManager, StorageMode};
//!
//! let manager = LruCacheManager::new(2)?;
//! let cache = manager.get_cache_with_mode::<String, String>("schemas", StorageMode::Soft)?;
//!
//! cache.put("1".to_string(), "one".to_string());
//! cache.put("2".to_string(), "two".to_string());
//! cache.put("3".to_string(), "three".to_string());
//!
//! assert_eq!(cache.len(), 2);
//! assert!(cache.get(&"1".to_string()).is_none());
//! # Ok::<(), lru_cache_manager::CacheError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod manager;
pub mod tasks;

pub use cache::{Cache, StorageMode};
pub use config::Config;
pub use error::{CacheError, Result};
pub use manager::{CacheSummary, LruCacheManager};
pub use tasks::{spawn_pressure_task, PressureFlag, PressureProbe};
