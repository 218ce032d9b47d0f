mod error;
mod store;
mod table;

pub use error::HighScoreError;
pub use store::{DEFAULT_HIGH_SCORE_FILE, HighScoreStore};
pub use table::{HighScoreEntry, HighScoreTable, MAX_HIGH_SCORES, MAX_LABEL_CHARS, sanitize_label};
