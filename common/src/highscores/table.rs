use serde::{Deserialize, Serialize};

pub const MAX_HIGH_SCORES: usize = 5;
pub const MAX_LABEL_CHARS: usize = 16;
const DEFAULT_LABEL: &str = "PLAYER";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    #[serde(default)]
    pub label: Option<String>,
    pub score: u32,
    /// Unix time in milliseconds.
    pub timestamp_ms: i64,
}

impl HighScoreEntry {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }
}

/// Keeps printable characters, flattens whitespace and caps the length. Blank labels become `None`.
pub fn sanitize_label(label: &str) -> Option<String> {
    let cleaned: String = label
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect();
    let trimmed: String = cleaned.trim().chars().take(MAX_LABEL_CHARS).collect();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Best scores first, never more than [`MAX_HIGH_SCORES`] entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the ordering and cap on entries that came from outside, e.g. a hand-edited file.
    pub fn from_entries(entries: Vec<HighScoreEntry>) -> Self {
        let mut entries: Vec<HighScoreEntry> = entries
            .into_iter()
            .map(|entry| HighScoreEntry {
                label: entry.label.as_deref().and_then(sanitize_label),
                ..entry
            })
            .collect();
        // Stable sort: equal scores keep their stored order.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the label of the entry at `rank`. Returns `false` if there is no such entry.
    pub fn relabel(&mut self, rank: usize, label: Option<&str>) -> bool {
        match self.entries.get_mut(rank) {
            Some(entry) => {
                entry.label = label.and_then(sanitize_label);
                true
            }
            None => false,
        }
    }

    pub fn record(&mut self, score: u32, label: Option<&str>) -> Option<usize> {
        self.record_at(score, label, chrono::Utc::now().timestamp_millis())
    }

    /// Inserts the score and trims the table. Returns the zero-based rank if the entry survived.
    pub fn record_at(
        &mut self,
        score: u32,
        label: Option<&str>,
        timestamp_ms: i64,
    ) -> Option<usize> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.score < score)
            .unwrap_or(self.entries.len());

        self.entries.insert(
            position,
            HighScoreEntry {
                label: label.and_then(sanitize_label),
                score,
                timestamp_ms,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);

        (position < MAX_HIGH_SCORES).then_some(position)
    }
}
