//! Clipboard adapters.

use async_trait::async_trait;

use crate::error::ClipboardError;
use crate::traits::Clipboard;

/// Clipboard for hosts without one; every write fails with
/// [`ClipboardError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

#[async_trait]
impl Clipboard for NoClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// The operating system clipboard, through `arboard`.
#[cfg(feature = "clipboard")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        // arboard talks to the display server synchronously
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Backend(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Backend(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Backend(e.to_string()))?
    }
}
