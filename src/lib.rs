// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod proc;
pub mod state;
pub mod supervisor;

use std::time::Duration;

use anyhow::Result;

use crate::cli::{CliArgs, Command};
use crate::state::StateStore;

/// High-level entry point used by `main.rs`.
///
/// Dispatches to the supervisor operations, all of which work against the
/// state store at its default location. The hidden `__run` arm is the entry
/// point of the worker processes `up` spawns.
pub async fn run(args: CliArgs) -> Result<()> {
    let store = StateStore::default_location();

    match args.command {
        Command::Up { config } => supervisor::up(&config, &store).await?,
        Command::Ps => supervisor::ps(&store)?,
        Command::Stop { name } => supervisor::stop_one(&store, &name)?,
        Command::Down => supervisor::down(&store)?,
        Command::RunLoop(run_args) => {
            exec::run_command_loop(
                &run_args.name,
                &run_args.command,
                Duration::from_millis(run_args.interval_ms),
                run_args.quantity,
            )
            .await;
        }
    }

    Ok(())
}
