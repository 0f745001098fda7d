use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::{ClipboardError, StorageError};
use crate::stats::Stats;
use crate::types::{Notice, Theme};

/// Key-value storage scoped to this application.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the given keys. Keys that were never stored are simply absent
    /// from the returned map.
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StorageError>;

    /// Store every entry, leaving other keys untouched.
    async fn set(&self, entries: Map<String, Value>) -> Result<(), StorageError>;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The host surface that displays the session.
pub trait Renderer {
    fn render_text(&mut self, text: &str);
    fn render_stats(&mut self, stats: &Stats);
    fn render_theme(&mut self, theme: Theme);

    // Enable or disable the host's undo affordance
    fn render_undo_available(&mut self, available: bool);

    fn notify(&mut self, notice: Notice);
}
