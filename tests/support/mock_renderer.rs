use textkit::{Notice, NoticeLevel, Renderer, Stats, Theme};

#[derive(Debug, Default)]
pub struct MockRenderer {
    pub text: String,
    pub stats: Stats,
    pub theme: Option<Theme>,
    pub undo_available: bool,
    pub notices: Vec<Notice>,
    pub text_renders: usize,
}

impl MockRenderer {
    pub fn errors(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .map(|n| n.message.as_str())
            .collect()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl Renderer for MockRenderer {
    fn render_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.text_renders += 1;
    }

    fn render_stats(&mut self, stats: &Stats) {
        self.stats = *stats;
    }

    fn render_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn render_undo_available(&mut self, available: bool) {
        self.undo_available = available;
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
