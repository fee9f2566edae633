//! Memory Pressure Task
//!
//! Background task that sheds soft caches while the host reports memory pressure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::manager::LruCacheManager;

// == Pressure Probe ==
/// Source of memory-pressure signals.
pub trait PressureProbe: Send + Sync {
    /// Returns true while the host wants memory back.
    fn under_pressure(&self) -> bool;
}

// == Pressure Flag ==
/// Probe driven by the host: raise it when memory runs low, clear it afterwards.
#[derive(Debug, Default)]
pub struct PressureFlag {
    raised: AtomicBool,
}

impl PressureFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    pub fn clear(&self) {
        self.raised.store(false, Ordering::Release);
    }
}

impl PressureProbe for PressureFlag {
    fn under_pressure(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

/// Spawns a background task that relieves memory pressure on soft caches.
///
/// Every `interval` the task asks `probe` whether memory is short and, if
/// so, sheds each soft cache down to `retain_percent` of its capacity.
/// Strong caches are never touched.
///
/// # Returns
/// A JoinHandle for the spawned task; abort it to stop relieving pressure.
///
/// # Example
/// ```ignore
/// let manager = Arc::new(LruCacheManager::new(1000)?);
/// let flag = Arc::new(PressureFlag::new());
/// let handle = spawn_pressure_task(manager.clone(), flag.clone(), Duration::from_secs(5), 50);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_pressure_task(
    manager: Arc<LruCacheManager>,
    probe: Arc<dyn PressureProbe>,
    interval: Duration,
    retain_percent: u8,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting memory pressure task with interval of {:?}, retaining {}%",
            interval, retain_percent
        );

        loop {
            tokio::time::sleep(interval).await;

            if !probe.under_pressure() {
                continue;
            }

            let shed = manager.relieve_pressure(retain_percent);
            if shed > 0 {
                info!("Memory pressure: shed {} soft cache entries", shed);
            } else {
                debug!("Memory pressure: nothing to shed");
            }
        }
    })
}
