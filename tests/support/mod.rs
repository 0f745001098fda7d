#![allow(dead_code)]

pub mod mock_clipboard;
pub mod mock_renderer;
pub mod mock_store;

use std::sync::Arc;

use textkit::{Session, SessionBuilder, SessionConfig};

use mock_clipboard::MockClipboard;
use mock_renderer::MockRenderer;
use mock_store::MockStore;

pub struct Harness {
    pub store: Arc<MockStore>,
    pub clipboard: Arc<MockClipboard>,
    pub session: Session<MockRenderer>,
}

pub fn session_with(store: MockStore, config: SessionConfig) -> Harness {
    let store = Arc::new(store);
    let clipboard = Arc::new(MockClipboard::new());
    let session = SessionBuilder::new(store.clone(), clipboard.clone(), MockRenderer::default())
        .config(config)
        .build();
    Harness {
        store,
        clipboard,
        session,
    }
}

/// A restored session over an empty store.
pub async fn fresh_session() -> Harness {
    let mut harness = session_with(MockStore::new(), SessionConfig::default());
    harness.session.restore().await;
    harness
}
