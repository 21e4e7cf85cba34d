// src/exec/runner.rs

//! The per-task run loop.
//!
//! One worker process runs exactly one of these loops for its whole life.
//! The loop's job is "keep running the command on schedule", not "ensure
//! success": a non-zero exit or a failed spawn is logged and swallowed, and
//! the loop proceeds to the next tick after the configured delay.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::exec::shell::shell_command;

/// Execute `command` repeatedly with `interval` between runs.
///
/// - `quantity > 0`: run exactly that many times; sleep between consecutive
///   runs, but not after the final one.
/// - `quantity == 0`: run forever; sleep after every run.
///
/// Returns only when a finite run count has been exhausted. The unbounded
/// variant ends by external termination of the whole process.
pub async fn run_command_loop(name: &str, command: &str, interval: Duration, quantity: u32) {
    info!(
        task = %name,
        pid = std::process::id(),
        cmd = %command,
        "task runner started"
    );

    if quantity > 0 {
        for i in 0..quantity {
            run_once(name, command).await;
            if i + 1 < quantity {
                sleep(interval).await;
            }
        }
        info!(task = %name, runs = quantity, "task runner finished");
    } else {
        loop {
            run_once(name, command).await;
            sleep(interval).await;
        }
    }
}

/// One tick: spawn the shell command, drain its output, wait for it to exit.
///
/// Failure of the command is never propagated; the exit status is only
/// logged here and invisible to the supervisor.
async fn run_once(name: &str, command: &str) {
    let mut cmd = shell_command(command);
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            warn!(task = %name, error = %err, "failed to spawn command; will retry next tick");
            return;
        }
    };

    // Drain both streams so buffers don't fill; surface lines at debug.
    if let Some(stdout) = child.stdout.take() {
        let task_name = name.to_string();
        tokio::spawn(async move {
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(task = %task_name, "stdout: {}", line);
            }
        });
    }

    if let Some(stderr) = child.stderr.take() {
        let task_name = name.to_string();
        tokio::spawn(async move {
            let reader = BufReader::new(stderr);
            let mut lines = reader.lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(task = %task_name, "stderr: {}", line);
            }
        });
    }

    match child.wait().await {
        Ok(status) if status.success() => {
            debug!(task = %name, "command completed");
        }
        Ok(status) => {
            let code = status.code().unwrap_or(-1);
            warn!(task = %name, exit_code = code, "command failed; will retry next tick");
        }
        Err(err) => {
            warn!(task = %name, error = %err, "waiting for command failed; will retry next tick");
        }
    }
}
