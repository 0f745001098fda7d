use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use textkit::{Clipboard, ClipboardError};

#[derive(Default, Debug)]
pub struct MockClipboard {
    content: Mutex<Option<String>>,
    fail: AtomicBool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClipboardError::Backend("permission denied".to_string()));
        }
        *self.content.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
