use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::highscores::DEFAULT_HIGH_SCORE_FILE;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct HighScoreConfig {
    pub location: String,
}

impl Default for HighScoreConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_HIGH_SCORE_FILE.to_string(),
        }
    }
}

impl Validate for HighScoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("high score location must not be empty".to_string());
        }
        Ok(())
    }
}
