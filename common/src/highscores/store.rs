use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, InMemoryContentProvider,
    YamlConfigSerializer,
};
use crate::log_warn;
use super::error::HighScoreError;
use super::table::{HighScoreEntry, HighScoreTable};

pub const DEFAULT_HIGH_SCORE_FILE: &str = "snake_vibes_highscores.yaml";

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    entries: Vec<HighScoreEntry>,
}

/// On-disk layout as read back, entries kept as raw YAML values.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredHighScoreFile {
    #[serde(default)]
    entries: Option<Vec<serde_yaml_ng::Value>>,
}

#[derive(Debug, Deserialize)]
struct StoredEntry {
    #[serde(default)]
    label: Option<String>,
    score: i64,
    #[serde(default)]
    timestamp_ms: i64,
}

impl From<StoredEntry> for HighScoreEntry {
    fn from(entry: StoredEntry) -> Self {
        Self {
            label: entry.label,
            score: entry.score.clamp(0, u32::MAX as i64) as u32,
            timestamp_ms: entry.timestamp_ms,
        }
    }
}

fn parse_entries(values: Vec<serde_yaml_ng::Value>) -> Vec<HighScoreEntry> {
    let total = values.len();
    let entries: Vec<HighScoreEntry> = values
        .into_iter()
        .filter_map(|value| serde_yaml_ng::from_value::<StoredEntry>(value).ok())
        .map(HighScoreEntry::from)
        .collect();

    if entries.len() < total {
        log_warn!("Skipped {} malformed high score entries", total - entries.len());
    }
    entries
}

/// Durable home of the high-score table, layered like configuration: raw content
/// from a provider, YAML on top.
pub struct HighScoreStore {
    content_provider: Box<dyn ConfigContentProvider + Send>,
    serializer: YamlConfigSerializer,
}

impl HighScoreStore {
    pub fn new(content_provider: Box<dyn ConfigContentProvider + Send>) -> Self {
        Self {
            content_provider,
            serializer: YamlConfigSerializer::new(),
        }
    }

    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileContentConfigProvider::new(file_path)))
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryContentProvider::new()))
    }

    /// Nothing stored yet loads as an empty table. Entries that cannot be read are skipped and
    /// negative scores clamp to zero; only an unreadable document is an error.
    pub fn load(&self) -> Result<HighScoreTable, HighScoreError> {
        let Some(content) = self
            .content_provider
            .get_config_content()
            .map_err(HighScoreError::Storage)?
        else {
            return Ok(HighScoreTable::new());
        };

        let file: StoredHighScoreFile = self
            .serializer
            .deserialize(&content)
            .map_err(HighScoreError::Serialization)?;
        let entries = parse_entries(file.entries.unwrap_or_default());
        Ok(HighScoreTable::from_entries(entries))
    }

    pub fn save(&self, table: &HighScoreTable) -> Result<(), HighScoreError> {
        let file = HighScoreFile {
            entries: table.entries().to_vec(),
        };
        let content = self
            .serializer
            .serialize(&file)
            .map_err(HighScoreError::Serialization)?;
        self.content_provider
            .set_config_content(&content)
            .map_err(HighScoreError::Storage)
    }
}
