use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Session tuning knobs. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Quiet period before a debounced write fires.
    pub debounce_ms: u64,
    /// Maximum undo snapshots kept (at least 1).
    pub history_limit: usize,
    /// How long transient notices stay visible.
    pub notice_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            history_limit: DEFAULT_HISTORY_LIMIT,
            notice_ms: 1500,
        }
    }
}

impl SessionConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }
}
