#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighScoreError {
    Storage(String),
    Serialization(String),
}

impl std::fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighScoreError::Storage(e) => write!(f, "High score storage error: {}", e),
            HighScoreError::Serialization(e) => write!(f, "High score format error: {}", e),
        }
    }
}

impl std::error::Error for HighScoreError {}
