// src/supervisor.rs

//! Orchestration of task runners and the lifecycle commands.
//!
//! `up` is the only operation that owns live child handles; `ps`, `stop`, and
//! `down` run as separate invocations and work purely against the state file
//! and the OS process table. Within one `up` the supervisor is the only
//! writer of the state store — runners never touch it.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::config::{self, TaskConfig};
use crate::errors::{Result, TaskerError};
use crate::proc::{self, SignalOutcome};
use crate::state::{StateStore, TaskRecord, TaskStatus};

/// Load the task list, spawn one runner process per task, and block until
/// every runner exits or the operator interrupts.
///
/// Runners are spawned in the order the config lists them. Their records are
/// persisted in a single save once the whole spawn loop has finished, as in
/// the original workflow; a crash mid-loop loses this invocation's
/// registrations, which the state model accepts. A new `up` overwrites
/// records of tasks with the same name (last writer wins).
///
/// On Ctrl-C, every still-running runner is killed immediately — no grace
/// period, no cooperative shutdown — and the count is reported.
pub async fn up(config_path: impl AsRef<Path>, store: &StateStore) -> Result<()> {
    let cfg = config::load_and_validate(config_path)?;

    let mut state = store.load()?;
    let mut children: Vec<(String, Child)> = Vec::new();

    for task in &cfg.tasks {
        let interval = task.interval().map_err(TaskerError::Config)?;
        let child = spawn_runner(task, interval)?;
        let pid = child
            .id()
            .map(|id| id as i32)
            .with_context(|| format!("runner for task '{}' exited before its PID was read", task.name))?;

        debug!(task = %task.name, pid, "spawned task runner");

        state.insert(
            task.name.clone(),
            TaskRecord {
                pid,
                command: task.command.clone(),
                status: TaskStatus::Running,
            },
        );
        children.push((task.name.clone(), child));
    }

    store.save(&state)?;
    println!("started {} tasks", children.len());

    let interrupted = tokio::select! {
        _ = wait_for_all(&mut children) => false,
        _ = tokio::signal::ctrl_c() => true,
    };

    if interrupted {
        let stopped = kill_remaining(&mut children).await;
        println!("interrupted; force-stopped {stopped} running tasks");
    } else {
        info!("all task runners finished");
    }

    Ok(())
}

/// Print a table of known tasks with liveness recomputed at query time.
///
/// The persisted status is not consulted for the STATUS column: a record may
/// say `running` long after the process died, and only the process table
/// knows better.
pub fn ps(store: &StateStore) -> Result<()> {
    let state = store.load()?;

    if state.is_empty() {
        println!("no active tasks");
        return Ok(());
    }

    println!("{:<15} {:<8} {:<10} COMMAND", "NAME", "PID", "STATUS");
    println!("{}", "-".repeat(60));

    for (name, record) in state.iter() {
        let status = if proc::is_alive(record.pid) {
            "running"
        } else {
            "stopped"
        };
        println!(
            "{:<15} {:<8} {:<10} {}",
            name, record.pid, status, record.command
        );
    }

    Ok(())
}

/// Gracefully stop one task by name.
///
/// An unknown name is reported and leaves the store untouched. When SIGTERM
/// is delivered the record flips to `stopped` and is persisted; an
/// already-exited process is reported without an error and without touching
/// the store.
pub fn stop_one(store: &StateStore, name: &str) -> Result<()> {
    let mut state = store.load()?;

    let Some(record) = state.get_mut(name) else {
        println!("no such task '{name}'");
        return Ok(());
    };
    let pid = record.pid;

    match proc::terminate(pid)? {
        SignalOutcome::Delivered => {
            record.status = TaskStatus::Stopped;
            store.save(&state)?;
            println!("stopped task '{name}' (PID {pid})");
        }
        SignalOutcome::AlreadyGone => {
            println!("process for task '{name}' already exited");
        }
    }

    Ok(())
}

/// Gracefully stop every known task, then delete the state file.
///
/// Prints a per-task outcome line. Signaling failures other than an
/// already-gone process are logged and skipped so the teardown always runs
/// to completion and the state file is always removed.
pub fn down(store: &StateStore) -> Result<()> {
    let state = store.load()?;

    for (name, record) in state.iter() {
        match proc::terminate(record.pid) {
            Ok(SignalOutcome::Delivered) => println!("stopped {} (PID {})", name, record.pid),
            Ok(SignalOutcome::AlreadyGone) => println!("{name} already exited"),
            Err(e) => {
                warn!(task = %name, pid = record.pid, error = %e, "failed to signal task; skipping");
            }
        }
    }

    store.delete()?;
    println!("all tasks stopped");
    Ok(())
}

/// Spawn the worker process for one task.
///
/// The worker is a re-exec of this binary with the hidden `__run` subcommand,
/// so each task loop lives in its own OS process: one task's blocking command
/// never stalls a sibling's timer, and a signal can stop a single loop. The
/// child is deliberately not killed on drop — it must outlive this `up` if
/// the supervisor is torn down uncleanly, so that `stop`/`down` can still
/// reach it by PID.
fn spawn_runner(task: &TaskConfig, interval: Duration) -> Result<Child> {
    let exe = std::env::current_exe().context("resolving path to the tasker binary")?;

    let mut cmd = Command::new(exe);
    cmd.arg("__run")
        .arg("--name")
        .arg(&task.name)
        .arg("--command")
        .arg(&task.command)
        .arg("--interval-ms")
        .arg(interval.as_millis().to_string())
        .arg("--quantity")
        .arg(task.quantity().to_string());

    let child = cmd
        .spawn()
        .with_context(|| format!("spawning runner process for task '{}'", task.name))?;

    Ok(child)
}

/// Wait for every spawned runner to exit naturally.
///
/// Only finite-quantity tasks ever finish on their own; with any unbounded
/// task in the set this pends forever and `up` exits via interrupt instead.
async fn wait_for_all(children: &mut [(String, Child)]) {
    for (name, child) in children.iter_mut() {
        match child.wait().await {
            Ok(status) => debug!(task = %name, code = status.code(), "task runner exited"),
            Err(e) => warn!(task = %name, error = %e, "waiting for task runner failed"),
        }
    }
}

/// Kill every runner that is still alive; returns how many were stopped.
async fn kill_remaining(children: &mut [(String, Child)]) -> usize {
    let mut stopped = 0;

    for (name, child) in children.iter_mut() {
        match child.try_wait() {
            Ok(Some(_)) => {
                // Already exited and reaped.
            }
            Ok(None) => {
                if let Err(e) = child.start_kill() {
                    warn!(task = %name, error = %e, "failed to kill task runner");
                } else {
                    stopped += 1;
                }
                let _ = child.wait().await;
            }
            Err(e) => {
                warn!(task = %name, error = %e, "could not determine runner status");
            }
        }
    }

    stopped
}
