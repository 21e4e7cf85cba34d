// src/config/model.rs

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [[task]]
/// name = "heartbeat"
/// command = "curl -s https://example.com/ping"
/// interval = "30s"
///
/// [[task]]
/// name = "warmup"
/// command = "./scripts/warm-cache.sh"
/// interval = "2s"
/// quantity = 3
/// ```
///
/// Tasks are kept as an ordered list, not a map, because the supervisor
/// spawns them in the order they appear in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// All tasks from `[[task]]` entries.
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskConfig>,
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// Task name; must be unique within the file.
    pub name: String,

    /// The shell command line to execute on every tick.
    pub command: String,

    /// Delay between consecutive runs, e.g. `"500ms"`, `"3s"`, `"1m"`.
    ///
    /// A bare number is interpreted as seconds. If `None`, there is no delay.
    #[serde(default)]
    pub interval: Option<String>,

    /// How many times to run the command; `0` (the default) means forever.
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl TaskConfig {
    /// Effective inter-run delay; zero when unset.
    pub fn interval(&self) -> Result<Duration, String> {
        match self.interval {
            Some(ref s) => parse_interval(s),
            None => Ok(Duration::ZERO),
        }
    }

    /// Effective run count; `0` means unbounded.
    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(0)
    }
}

/// Parse an interval string like `"3s"`, `"250ms"`, `"1m"`, `"2h"`.
///
/// A string with no unit suffix (e.g. `"5"`) is treated as seconds, matching
/// the plain-number intervals accepted in older task lists.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty interval string".to_string());
    }

    // Find the boundary between digits and suffix.
    let idx = s.chars().position(|c| !c.is_ascii_digit());

    let (num_part, unit_part) = match idx {
        Some(i) => s.split_at(i),
        // All digits: bare seconds.
        None => (s, "s"),
    };

    let value: u64 = num_part
        .parse()
        .map_err(|e| format!("invalid interval number '{}': {}", num_part, e))?;
    let unit = unit_part.trim().to_lowercase();

    match unit.as_str() {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => Ok(Duration::from_secs(value * 60)),
        "h" => Ok(Duration::from_secs(value * 60 * 60)),
        _ => Err(format!(
            "unsupported interval unit '{}'; expected ms, s, m, or h",
            unit
        )),
    }
}
