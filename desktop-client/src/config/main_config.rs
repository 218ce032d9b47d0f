use std::path::Path;
use serde::{Deserialize, Serialize};
use snake_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use snake_common::highscores::MAX_LABEL_CHARS;
use snake_common::SnakeSettings;

use super::HighScoreConfig;

pub const DEFAULT_CONFIG_FILE: &str = "snake_vibes_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: SnakeSettings,
    pub high_scores: HighScoreConfig,
    pub player_name: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.high_scores.validate()?;
        if let Some(ref name) = self.player_name
            && name.chars().count() > MAX_LABEL_CHARS
        {
            return Err(format!(
                "player_name must be at most {} characters",
                MAX_LABEL_CHARS
            ));
        }
        Ok(())
    }
}
