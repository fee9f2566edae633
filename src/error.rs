//! Error types for the cache manager
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::cache::StorageMode;

// == Cache Error Enum ==
/// Unified error type for caches and the cache manager.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Rejected argument (zero capacity, missing key or value)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A cache was requested again with a different storage mode.
    ///
    /// Never returned to callers; the manager logs it and keeps the original cache.
    #[error("Cache '{name}' was created with {existing:?} storage, ignoring requested {requested:?}")]
    ConfigurationConflict {
        name: String,
        existing: StorageMode,
        requested: StorageMode,
    },

    /// The name is registered with different key/value types
    #[error("Cache '{0}' is registered with different key/value types")]
    TypeMismatch(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache manager.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_names_both_modes() {
        let err = CacheError::ConfigurationConflict {
            name: "schemas".to_string(),
            existing: StorageMode::Soft,
            requested: StorageMode::Strong,
        };

        let msg = err.to_string();
        assert!(msg.contains("schemas"));
        assert!(msg.contains("Soft"));
        assert!(msg.contains("Strong"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = CacheError::InvalidArgument("capacity must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: capacity must be positive");
    }
}
