// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments for `tasker`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tasker",
    version,
    about = "Run named recurring shell commands as supervised processes.",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKER_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start every task from the config file as its own supervised process.
    Up {
        /// Path to the config file (TOML).
        ///
        /// Default: `Tasker.toml` in the current working directory.
        #[arg(long, value_name = "PATH", default_value = "Tasker.toml")]
        config: String,
    },

    /// List known tasks with their current liveness.
    Ps,

    /// Gracefully stop one task by name.
    Stop {
        /// Name of the task to stop.
        name: String,
    },

    /// Gracefully stop all tasks and clear the persisted state.
    Down,

    /// Internal worker entry point; `up` spawns one of these per task.
    #[command(name = "__run", hide = true)]
    RunLoop(RunLoopArgs),
}

/// Arguments for the hidden `__run` worker subcommand.
///
/// These are produced by the supervisor itself, never typed by an operator,
/// so they stay in pre-digested form (interval already in milliseconds).
#[derive(Debug, Clone, Args)]
pub struct RunLoopArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub command: String,

    #[arg(long, value_name = "MS")]
    pub interval_ms: u64,

    /// Number of runs; 0 means run forever.
    #[arg(long)]
    pub quantity: u32,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
