use std::sync::Arc;

use crate::config::SessionConfig;
use crate::error::{ClipboardError, ParamError, StorageError, TransformError};
use crate::history::History;
use crate::persist::Persister;
use crate::settings::PersistedState;
use crate::stats::Stats;
use crate::traits::{Clipboard, KeyValueStore, Renderer};
use crate::transform::{Tool, Transform};
use crate::types::{Notice, NoticeLevel, Param, PersistMode, PersistState, Tab, Theme, ToolParameters};

pub struct SessionBuilder<R: Renderer> {
    store: Arc<dyn KeyValueStore>,
    clipboard: Arc<dyn Clipboard>,
    renderer: R,
    config: SessionConfig,
}

impl<R: Renderer> SessionBuilder<R> {
    pub fn new(store: Arc<dyn KeyValueStore>, clipboard: Arc<dyn Clipboard>, renderer: R) -> Self {
        Self {
            store,
            clipboard,
            renderer,
            config: SessionConfig::default(),
        }
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Session<R> {
        Session {
            document: String::new(),
            params: ToolParameters::default(),
            theme: Theme::default(),
            stats: Stats::of(""),
            history: History::new(self.config.history_limit),
            persister: Persister::new(self.store, self.config.debounce()),
            clipboard: self.clipboard,
            renderer: self.renderer,
            config: self.config,
        }
    }
}

/// The editor session: one document, its tool parameters, theme and undo
/// history.
///
/// Every mutation re-renders what changed and schedules a write of the
/// full [`PersistedState`]. Writes run on the tokio runtime, so the session
/// must be driven from inside one.
pub struct Session<R: Renderer> {
    document: String,
    params: ToolParameters,
    theme: Theme,
    stats: Stats,
    history: History,
    persister: Persister,
    clipboard: Arc<dyn Clipboard>,
    renderer: R,
    config: SessionConfig,
}

impl<R: Renderer> Session<R> {
    /// Load the stored state, or defaults when nothing usable is stored.
    /// Returns whether any stored state was found.
    pub async fn restore(&mut self) -> bool {
        let found = match self.persister.store().get(&PersistedState::KEYS).await {
            Ok(entries) if entries.is_empty() => false,
            Ok(entries) => {
                let restored = PersistedState::from_entries(&entries);
                self.document = restored.text;
                self.params = restored.params;
                self.theme = restored.theme;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored state, starting empty");
                false
            }
        };
        tracing::debug!(found, chars = self.document.len(), "session restored");

        self.history = History::new(self.config.history_limit);
        self.history.record(&self.document);
        self.stats = Stats::of(&self.document);
        self.persister.baseline(self.persisted());

        self.renderer.render_theme(self.theme);
        self.renderer.render_text(&self.document);
        self.renderer.render_stats(&self.stats);
        self.render_undo();
        found
    }

    /// Apply `transform` to the document.
    ///
    /// On failure the document is left as it was and the error is both
    /// returned and shown as a notice.
    pub fn apply(&mut self, transform: &Transform) -> Result<(), TransformError> {
        let tool = transform.tool();
        self.history.record(&self.document);
        match transform.apply(&self.document) {
            Ok(output) => {
                tracing::debug!(
                    %tool,
                    before = self.document.len(),
                    after = output.len(),
                    "applied transformation"
                );
                self.document = output;
                self.history.record(&self.document);
                self.document_replaced();
                self.persist(PersistMode::Immediate);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(%tool, error = %e, "transformation failed");
                self.render_undo();
                self.notify(NoticeLevel::Error, format!("{tool} failed: {e}"));
                Err(e)
            }
        }
    }

    /// Apply `tool` with the current parameter values.
    pub fn apply_tool(&mut self, tool: Tool) -> Result<(), TransformError> {
        let transform = tool.with_params(&self.params);
        self.apply(&transform)
    }

    /// Step back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        // Unapplied edits become a snapshot so undo lands on them first.
        self.history.record(&self.document);
        let Some(previous) = self.history.undo() else {
            self.render_undo();
            self.notify(NoticeLevel::Info, "Nothing to undo".to_string());
            return false;
        };
        self.document = previous.to_string();
        self.document_replaced();
        self.persist(PersistMode::Immediate);
        true
    }

    pub fn clear(&mut self) {
        self.history.record(&self.document);
        self.document.clear();
        self.history.record(&self.document);
        self.document_replaced();
        self.persist(PersistMode::Immediate);
    }

    /// Free text editing from the host. The host already shows the text, so
    /// only the statistics are rendered.
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.document = text.into();
        self.stats = Stats::of(&self.document);
        self.renderer.render_stats(&self.stats);
        self.render_undo();
        self.persist(PersistMode::Debounced);
    }

    /// Set one parameter from its text form. Flags persist right away, text
    /// fields after the quiet period.
    pub fn set_param(&mut self, param: Param, value: &str) -> Result<(), ParamError> {
        self.params.assign(param, value)?;
        let mode = if param.is_flag() {
            PersistMode::Immediate
        } else {
            PersistMode::Debounced
        };
        self.persist(mode);
        Ok(())
    }

    pub fn update_params(&mut self, f: impl FnOnce(&mut ToolParameters)) {
        f(&mut self.params);
        self.persist(PersistMode::Debounced);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.params.active_tab = tab;
        self.persist(PersistMode::Immediate);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.renderer.render_theme(theme);
        self.persist(PersistMode::Immediate);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggled();
        self.set_theme(theme);
        theme
    }

    /// Copy the document to the clipboard, reporting the outcome as a notice.
    pub async fn copy(&mut self) -> Result<(), ClipboardError> {
        match self.clipboard.write_text(&self.document).await {
            Ok(()) => {
                self.notify(NoticeLevel::Info, "Copied to clipboard".to_string());
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "copy to clipboard failed");
                self.notify(NoticeLevel::Error, format!("Copy failed: {e}"));
                Err(e)
            }
        }
    }

    /// Stage the current state and schedule a write.
    pub fn persist(&mut self, mode: PersistMode) {
        self.persister.stage(self.persisted());
        self.persister.schedule(mode);
    }

    /// Write the current state now, superseding any pending write.
    pub async fn flush(&mut self) -> Result<(), StorageError> {
        self.persister.flush().await
    }

    pub fn text(&self) -> &str {
        &self.document
    }

    pub fn params(&self) -> &ToolParameters {
        &self.params
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.len() >= 2 || self.history.latest().is_some_and(|last| last != self.document)
    }

    pub fn persist_state(&self) -> PersistState {
        self.persister.state()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            text: self.document.clone(),
            params: self.params.clone(),
            theme: self.theme,
        }
    }

    fn document_replaced(&mut self) {
        self.stats = Stats::of(&self.document);
        self.renderer.render_text(&self.document);
        self.renderer.render_stats(&self.stats);
        self.render_undo();
    }

    fn render_undo(&mut self) {
        let available = self.can_undo();
        self.renderer.render_undo_available(available);
    }

    fn notify(&mut self, level: NoticeLevel, message: String) {
        self.renderer.notify(Notice {
            level,
            message,
            duration: self.config.notice_duration(),
        });
    }
}
