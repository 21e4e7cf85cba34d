// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! Config problems abort before anything is spawned; a corrupt state file is
//! fatal for the invoking command; IO failures on state persistence are
//! surfaced to the operator. An already-gone PID when signaling is *not* an
//! error — that outcome lives in [`crate::proc::SignalOutcome`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("corrupt state file at {path:?}: {source}")]
    CorruptState {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskerError>;
