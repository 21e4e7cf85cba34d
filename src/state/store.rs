// src/state/store.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{Result, TaskerError};
use crate::state::model::TaskRecord;

/// Path to the state file, relative to the current working directory.
///
/// The file is a pretty-printed JSON mapping from task name to record, so an
/// operator can inspect it with a pager when debugging.
pub const STATE_FILE_PATH: &str = ".tasker/state.json";

/// The full persisted mapping, loaded and saved as a whole.
pub type StateMap = BTreeMap<String, TaskRecord>;

/// Handle to the on-disk state mapping.
///
/// There is no partial-update API: every mutation is read-modify-write of the
/// whole mapping. Writes go through a temp file in the same directory plus a
/// rename, so readers never observe a half-written file. No cross-process
/// locking is attempted; concurrent writers race with last-writer-wins.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location (`.tasker/state.json`).
    pub fn default_location() -> Self {
        Self::new(STATE_FILE_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole mapping; an absent file is an empty mapping.
    pub fn load(&self) -> Result<StateMap> {
        if !self.path.exists() {
            return Ok(StateMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;

        let state: StateMap =
            serde_json::from_str(&contents).map_err(|source| TaskerError::CorruptState {
                path: self.path.clone(),
                source,
            })?;

        Ok(state)
    }

    /// Serialize the whole mapping, replacing any prior content.
    pub fn save(&self, state: &StateMap) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| TaskerError::Other(anyhow::anyhow!("serializing state: {e}")))?;

        // Write-to-temp + rename so a concurrent `ps` never reads a torn file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = ?self.path, tasks = state.len(), "saved state file");
        Ok(())
    }

    /// Remove the state file entirely. Missing file counts as success.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = ?self.path, "deleted state file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
