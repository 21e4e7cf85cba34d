// src/config/mod.rs

//! Configuration loading and validation for tasker.
//!
//! Responsibilities:
//! - Define the TOML-backed task list model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like name uniqueness (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{parse_interval, ConfigFile, TaskConfig};
pub use validate::validate_config;
