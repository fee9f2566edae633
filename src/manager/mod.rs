//! Manager Module
//!
//! Registry handing out named, bounded caches.

mod registry;
mod summary;

pub use registry::LruCacheManager;
pub use summary::CacheSummary;
