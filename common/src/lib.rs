pub mod config;
pub mod games;
pub mod highscores;
pub mod logger;

pub use games::snake::{
    Cell, Direction, EndReason, GameSnapshot, GameStatus, InputCommand, SnakeSession,
    SnakeSettings,
};
pub use highscores::{HighScoreEntry, HighScoreStore, HighScoreTable};
