//! Configuration Module
//!
//! Handles loading cache manager settings from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache manager configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries each named cache can hold
    pub capacity_per_cache: usize,
    /// Interval in seconds between memory-pressure checks
    pub pressure_interval: u64,
    /// Share of capacity (0..=100) a soft cache keeps when pressure is relieved
    pub pressure_retain_percent: u8,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Entries per named cache (default: 1000)
    /// - `PRESSURE_INTERVAL` - Pressure check frequency in seconds (default: 5)
    /// - `PRESSURE_RETAIN_PERCENT` - Capacity share soft caches keep under pressure (default: 50)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity_per_cache: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.capacity_per_cache),
            pressure_interval: env::var("PRESSURE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.pressure_interval),
            pressure_retain_percent: env::var("PRESSURE_RETAIN_PERCENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.pressure_retain_percent),
        }
    }

    /// Checks that the values can be used to build a manager.
    pub fn validate(&self) -> Result<()> {
        if self.capacity_per_cache == 0 {
            return Err(CacheError::InvalidArgument(
                "capacity per cache must be a positive integer".to_string(),
            ));
        }
        if self.pressure_interval == 0 {
            return Err(CacheError::InvalidArgument(
                "pressure interval must be at least one second".to_string(),
            ));
        }
        if self.pressure_retain_percent > 100 {
            return Err(CacheError::InvalidArgument(format!(
                "retain percent must be within 0..=100, got {}",
                self.pressure_retain_percent
            )));
        }
        Ok(())
    }

    /// Pressure check interval as a `Duration`.
    pub fn pressure_interval(&self) -> Duration {
        Duration::from_secs(self.pressure_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity_per_cache: 1000,
            pressure_interval: 5,
            pressure_retain_percent: 50,
        }
    }
}
