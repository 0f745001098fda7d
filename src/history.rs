use std::collections::VecDeque;

/// Default number of snapshots kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Empty,
    Recording,
}

/// Bounded undo history of document snapshots, oldest first.
///
/// The newest entry is the current document once it has been recorded, so
/// undoing needs at least two entries. Consecutive entries never repeat.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// A `limit` of zero is raised to one.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    /// Record a snapshot. Returns false when it matches the newest entry.
    pub fn record(&mut self, text: &str) -> bool {
        if self.entries.back().is_some_and(|last| last == text) {
            return false;
        }
        self.entries.push_back(text.to_string());
        if self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        true
    }

    /// Drop the newest entry and return the one before it, which becomes
    /// current. Returns `None`, leaving the history untouched, when fewer
    /// than two entries exist.
    pub fn undo(&mut self) -> Option<&str> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop_back();
        self.entries.back().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn state(&self) -> HistoryState {
        if self.entries.is_empty() {
            HistoryState::Empty
        } else {
            HistoryState::Recording
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
