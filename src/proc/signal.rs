// src/proc/signal.rs

use anyhow::anyhow;
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use crate::errors::Result;

/// Outcome of asking a process to terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    /// SIGTERM was delivered; the process can catch it and wind down.
    Delivered,
    /// No such process: it already exited (or its PID was never valid).
    AlreadyGone,
}

/// Send SIGTERM to the given PID.
///
/// An already-exited target is an informational outcome, not an error; any
/// other signaling failure (e.g. EPERM on a PID that was reused by a foreign
/// process) is surfaced to the caller.
pub fn terminate(pid: i32) -> Result<SignalOutcome> {
    match kill(Pid::from_raw(pid), Signal::SIGTERM) {
        Ok(()) => Ok(SignalOutcome::Delivered),
        Err(Errno::ESRCH) => Ok(SignalOutcome::AlreadyGone),
        Err(e) => Err(anyhow!("sending SIGTERM to PID {pid}: {e}").into()),
    }
}
