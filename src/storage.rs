//! Key-value store adapters.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// Process-local store, for hosts without durable storage and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Map<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `entries`.
    pub fn with_entries(entries: Map<String, Value>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub fn snapshot(&self) -> Map<String, Value> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(pick(&entries, keys))
    }

    async fn set(&self, new_entries: Map<String, Value>) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.extend(new_entries);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// A missing file reads as an empty store. Writes merge into the existing
/// object, go to a sibling `.tmp` file and are renamed over the original.
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles
    lock: tokio::sync::Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file that a write goes to before it replaces `path`.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "store".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn load(&self) -> Result<Map<String, Value>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(data) if data.trim().is_empty() => Ok(Map::new()),
            Ok(data) => match serde_json::from_str::<Value>(&data)? {
                Value::Object(map) => Ok(map),
                other => Err(StorageError::Backend(format!(
                    "{} holds a JSON {} instead of an object",
                    self.path.display(),
                    json_kind(&other)
                ))),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StorageError> {
        let _guard = self.lock.lock().await;
        let entries = self.load().await?;
        Ok(pick(&entries, keys))
    }

    async fn set(&self, new_entries: Map<String, Value>) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.extend(new_entries);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let data = serde_json::to_string_pretty(&Value::Object(entries))?;
        // Replace the file whole so a crash leaves either version intact
        let staging = self.staging_path();
        tokio::fs::write(&staging, data).await?;
        if let Err(e) = tokio::fs::rename(&staging, &self.path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }
        Ok(())
    }
}

fn pick(entries: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .filter_map(|key| entries.get(*key).map(|v| (key.to_string(), v.clone())))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
