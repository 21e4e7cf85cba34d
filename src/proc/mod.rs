// src/proc/mod.rs

//! OS process table queries and signaling.
//!
//! Works on raw PIDs taken from the state file, not on child handles: `ps`,
//! `stop`, and `down` run as separate invocations and have no handle to the
//! runners an earlier `up` spawned.

pub mod liveness;
pub mod signal;

pub use liveness::is_alive;
pub use signal::{terminate, SignalOutcome};
