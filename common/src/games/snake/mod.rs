mod food;
mod game_state;
mod grid;
mod session;
mod settings;
mod snake;
mod types;

pub use food::{FoodSpawner, SpawnError};
pub use game_state::{GameSnapshot, SCORE_PER_FOOD, SnakeGameState, TickOutcome};
pub use grid::Grid;
pub use session::SnakeSession;
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use types::{Cell, Direction, EndReason, GameStatus, InputCommand};
