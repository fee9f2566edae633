//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the caches.
//!
//! # Tasks
//! - Memory pressure: sheds soft caches while the host is short on memory

mod pressure;

pub use pressure::{spawn_pressure_task, PressureFlag, PressureProbe};
