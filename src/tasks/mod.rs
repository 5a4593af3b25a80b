//! Background Tasks Module
//!
//! Contains the periodic work a cache runs while it is alive.
//!
//! # Tasks
//! - Sweep: removes stale cache entries at a fixed interval

mod sweep;

pub use sweep::{spawn_sweep_task, SweepHandle};
