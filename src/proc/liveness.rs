// src/proc/liveness.rs

use nix::errno::Errno;
use nix::sys::signal::kill;
use nix::unistd::Pid;

/// Whether the OS process table currently has a process with this PID.
///
/// Probes with signal 0, which performs permission and existence checks
/// without delivering anything. EPERM means the process exists but belongs
/// to someone else, so it counts as alive.
///
/// A recorded PID can be reused by an unrelated process after the original
/// runner exits; this check cannot tell the difference and will then report
/// a false "alive". Callers accept that approximation.
pub fn is_alive(pid: i32) -> bool {
    match kill(Pid::from_raw(pid), None) {
        Ok(()) => true,
        Err(Errno::EPERM) => true,
        Err(_) => false,
    }
}
