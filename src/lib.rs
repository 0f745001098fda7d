pub mod clipboard;
pub mod config;
pub mod error;
pub mod history;
pub mod persist;
pub mod session;
pub mod settings;
pub mod sort;
pub mod stats;
pub mod storage;
pub mod traits;
pub mod transform;
pub mod types;

pub use crate::clipboard::NoClipboard;
#[cfg(feature = "clipboard")]
pub use crate::clipboard::SystemClipboard;
pub use crate::config::SessionConfig;
pub use crate::error::{ClipboardError, ParamError, StorageError, TransformError};
pub use crate::history::{History, HistoryState};
pub use crate::persist::{Persister, Scheduler};
pub use crate::session::{Session, SessionBuilder};
pub use crate::settings::PersistedState;
pub use crate::stats::Stats;
pub use crate::storage::{JsonFileStore, MemoryStore};
pub use crate::traits::{Clipboard, KeyValueStore, Renderer};
pub use crate::transform::{Tool, Transform};
pub use crate::types::{
    Notice, NoticeLevel, Param, PersistMode, PersistState, ReplaceFlags, Tab, Theme, ToolParameters,
};
