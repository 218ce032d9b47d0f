mod high_score_config;
mod main_config;

pub use high_score_config::HighScoreConfig;
pub use main_config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
