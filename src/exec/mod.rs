// src/exec/mod.rs

//! Task execution layer.
//!
//! This module is responsible for actually running the command of one task,
//! using `tokio::process::Command`, on the schedule its config asked for.
//!
//! - [`shell`] builds the platform-appropriate shell invocation.
//! - [`runner`] owns the run loop that a worker process executes for its
//!   whole lifetime.

pub mod runner;
pub mod shell;

pub use runner::run_command_loop;
