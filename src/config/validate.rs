// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::ConfigFile;
use crate::errors::{Result, TaskerError};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - there is at least one task
/// - every task has a non-empty name and command
/// - task names are unique
/// - every `interval` string parses
///
/// All of these are fatal: the supervisor refuses to spawn anything from a
/// task list that fails validation.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_task_fields(cfg)?;
    validate_unique_names(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &ConfigFile) -> Result<()> {
    if cfg.tasks.is_empty() {
        return Err(TaskerError::Config(
            "config must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_fields(cfg: &ConfigFile) -> Result<()> {
    for task in cfg.tasks.iter() {
        if task.name.trim().is_empty() {
            return Err(TaskerError::Config(
                "every [[task]] entry needs a non-empty `name`".to_string(),
            ));
        }
        if task.command.trim().is_empty() {
            return Err(TaskerError::Config(format!(
                "task '{}' has an empty `command`",
                task.name
            )));
        }
        if let Err(e) = task.interval() {
            return Err(TaskerError::Config(format!(
                "task '{}' has an invalid `interval`: {}",
                task.name, e
            )));
        }
    }
    Ok(())
}

fn validate_unique_names(cfg: &ConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for task in cfg.tasks.iter() {
        if !seen.insert(task.name.as_str()) {
            return Err(TaskerError::Config(format!(
                "duplicate task name '{}'; names must be unique",
                task.name
            )));
        }
    }
    Ok(())
}
