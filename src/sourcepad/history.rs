use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub input: String,
    pub entered_at: DateTime<Utc>,
}

/// Append-only log of every command the user entered, successful or not.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<HistoryEntry>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, input: impl Into<String>) {
        self.entries.push(HistoryEntry {
            input: input.into(),
            entered_at: Utc::now(),
        });
    }

    /// Entries oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
