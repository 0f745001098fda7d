use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value};
use textkit::{KeyValueStore, StorageError};

/// In-memory store that records every write and can be told to fail.
#[derive(Default, Debug)]
pub struct MockStore {
    entries: Mutex<Map<String, Value>>,
    writes: Mutex<Vec<Map<String, Value>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(value: Value) -> Self {
        let store = Self::new();
        if let Value::Object(map) = value {
            *store.entries.lock().unwrap() = map;
        }
        store
    }

    pub fn entry(&self, key: &str) -> Option<Value> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub fn last_write(&self) -> Option<Map<String, Value>> {
        self.writes.lock().unwrap().last().cloned()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for MockStore {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("read refused".to_string()));
        }
        let entries = self.entries.lock().unwrap();
        Ok(keys
            .iter()
            .filter_map(|k| entries.get(*k).map(|v| (k.to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, new_entries: Map<String, Value>) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("quota exceeded".to_string()));
        }
        self.writes.lock().unwrap().push(new_entries.clone());
        self.entries.lock().unwrap().extend(new_entries);
        Ok(())
    }
}
