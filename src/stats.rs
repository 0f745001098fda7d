use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+\s*").expect("sentence pattern is valid")
});

/// Live counts shown next to the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Extended grapheme clusters.
    pub chars: usize,
    pub words: usize,
    /// An empty document still has one line.
    pub lines: usize,
    pub sentences: usize,
}

impl Stats {
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            return Stats {
                lines: 1,
                ..Stats::default()
            };
        }
        Stats {
            chars: text.graphemes(true).count(),
            words: text.split_whitespace().count(),
            lines: text.split('\n').count(),
            sentences: SENTENCE_END
                .split(text)
                .filter(|s| !s.trim().is_empty())
                .count(),
        }
    }
}
