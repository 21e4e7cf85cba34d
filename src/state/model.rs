// src/state/model.rs

use serde::{Deserialize, Serialize};

/// Last-known status of a task, as recorded by the supervisor.
///
/// `Running` means "last known running"; it is not authoritative, since the
/// process may have exited (or its PID may have been reused) since the record
/// was written. `Stopped` means an operator explicitly stopped the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Running,
    Stopped,
}

/// One persisted task entry, keyed by task name in the state file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// PID of the runner process spawned for this task.
    ///
    /// May refer to an unrelated process once the runner has exited and the
    /// OS reuses the PID; liveness checks accept that approximation.
    pub pid: i32,

    /// The shell command line the task runs.
    pub command: String,

    pub status: TaskStatus,
}
