//! Keyed debounced scheduling and the snapshot writer built on it.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::StorageError;
use crate::settings::PersistedState;
use crate::traits::KeyValueStore;
use crate::types::{PersistMode, PersistState};

const PERSIST_KEY: &str = "persist";

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    fired: bool,
    handle: Option<JoinHandle<()>>,
}

/// Runs tasks on the tokio runtime after a delay, at most one pending task
/// per key.
///
/// Scheduling a key replaces its pending task if that task has not fired
/// yet. Once a task fires it runs to completion.
///
/// Scheduling must happen inside a tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    slots: Arc<Mutex<HashMap<&'static str, Slot>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_debounced<F>(&self, key: &'static str, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let slots = Arc::clone(&self.slots);
        let mut guard = lock(&self.slots);
        let slot = guard.entry(key).or_default();
        if !slot.fired
            && let Some(previous) = slot.handle.take()
        {
            previous.abort();
        }
        slot.generation += 1;
        slot.fired = false;
        let generation = slot.generation;

        slot.handle = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            {
                let mut guard = lock(&slots);
                match guard.get_mut(key) {
                    Some(slot) if slot.generation == generation => slot.fired = true,
                    _ => return,
                }
            }
            task.await;
        }));
    }

    /// Run `task` as soon as the runtime gets to it, superseding any
    /// pending task for `key`.
    pub fn schedule_now<F>(&self, key: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.schedule_debounced(key, Duration::ZERO, task);
    }

    /// Drop the pending task for `key`. Returns false if nothing was
    /// pending; a task that already fired keeps running.
    pub fn cancel(&self, key: &'static str) -> bool {
        let mut guard = lock(&self.slots);
        let Some(slot) = guard.get_mut(key) else {
            return false;
        };
        if slot.fired {
            return false;
        }
        slot.generation += 1;
        match slot.handle.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self, key: &'static str) -> bool {
        lock(&self.slots).get(key).is_some_and(|slot| {
            !slot.fired && slot.handle.as_ref().is_some_and(|h| !h.is_finished())
        })
    }
}

#[derive(Debug, Default)]
struct Staged {
    state: PersistedState,
    revision: u64,
    written: u64,
}

/// Writes the latest staged [`PersistedState`] to a store.
///
/// Writes read the snapshot when they fire, never when they are scheduled,
/// so a late write can only carry newer data.
pub struct Persister {
    store: Arc<dyn KeyValueStore>,
    staged: Arc<Mutex<Staged>>,
    // Held from snapshot read to store completion, so writes land in
    // snapshot order
    write_lock: Arc<tokio::sync::Mutex<()>>,
    scheduler: Scheduler,
    debounce: Duration,
}

impl Persister {
    pub fn new(store: Arc<dyn KeyValueStore>, debounce: Duration) -> Self {
        Self {
            store,
            staged: Arc::new(Mutex::new(Staged::default())),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
            scheduler: Scheduler::new(),
            debounce,
        }
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Record `state` as what the store already holds. Leaves the
    /// persistence state unchanged.
    pub fn baseline(&self, state: PersistedState) {
        let mut staged = lock(&self.staged);
        staged.state = state;
        staged.written = staged.revision;
    }

    /// Replace the snapshot the next write will carry.
    pub fn stage(&self, state: PersistedState) {
        let mut staged = lock(&self.staged);
        staged.state = state;
        staged.revision += 1;
    }

    pub fn schedule(&self, mode: PersistMode) {
        let delay = match mode {
            PersistMode::Immediate => Duration::ZERO,
            PersistMode::Debounced => self.debounce,
        };
        let store = Arc::clone(&self.store);
        let staged = Arc::clone(&self.staged);
        let write_lock = Arc::clone(&self.write_lock);
        tracing::debug!(?mode, delay_ms = delay.as_millis() as u64, "scheduling write");
        self.scheduler.schedule_debounced(PERSIST_KEY, delay, async move {
            // Failures are logged inside; the next change retries.
            let _ = write_latest(store.as_ref(), &staged, &write_lock).await;
        });
    }

    /// Write the latest snapshot now and wait for the store.
    pub async fn flush(&self) -> Result<(), StorageError> {
        self.scheduler.cancel(PERSIST_KEY);
        write_latest(self.store.as_ref(), &self.staged, &self.write_lock).await
    }

    pub fn is_pending(&self) -> bool {
        self.scheduler.is_pending(PERSIST_KEY)
    }

    pub fn state(&self) -> PersistState {
        let staged = lock(&self.staged);
        if staged.written >= staged.revision {
            PersistState::Idle
        } else {
            PersistState::Dirty
        }
    }
}

async fn write_latest(
    store: &dyn KeyValueStore,
    staged: &Mutex<Staged>,
    write_lock: &tokio::sync::Mutex<()>,
) -> Result<(), StorageError> {
    let _writing = write_lock.lock().await;
    let (entries, revision) = {
        let staged = lock(staged);
        (staged.state.to_entries(), staged.revision)
    };
    match store.set(entries).await {
        Ok(()) => {
            let mut staged = lock(staged);
            staged.written = staged.written.max(revision);
            tracing::debug!(revision, "session state written");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, revision, "failed to persist session state");
            Err(e)
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
