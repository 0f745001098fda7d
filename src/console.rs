use textkit::{Notice, NoticeLevel, Renderer, Stats, Theme};

/// Renderer for a one-shot terminal run: keeps the latest values for the
/// caller to print and writes notices to stderr as they arrive.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    pub stats: Stats,
    pub theme: Theme,
    pub undo_available: bool,
}

impl Renderer for ConsoleRenderer {
    fn render_text(&mut self, _text: &str) {}

    fn render_stats(&mut self, stats: &Stats) {
        self.stats = *stats;
    }

    fn render_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn render_undo_available(&mut self, available: bool) {
        self.undo_available = available;
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => eprintln!("{}", notice.message),
            NoticeLevel::Error => eprintln!("error: {}", notice.message),
        }
    }
}

pub fn format_stats(stats: &Stats) -> String {
    format!(
        "chars: {}  words: {}  lines: {}  sentences: {}",
        stats.chars, stats.words, stats.lines, stats.sentences
    )
}
