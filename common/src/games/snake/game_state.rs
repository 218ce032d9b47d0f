use crate::games::SessionRng;
use crate::log;
use super::food::{FoodSpawner, SpawnError};
use super::grid::Grid;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Cell, Direction, EndReason, GameStatus};

pub const SCORE_PER_FOOD: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running, nothing changed.
    Idle,
    Moved,
    Ate,
    Ended(EndReason),
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub field_width: usize,
    pub field_height: usize,
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub status: GameStatus,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn is_board_full(&self) -> bool {
        self.status == GameStatus::GameOver(EndReason::BoardFull)
    }
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    status: GameStatus,
    ticks: u64,
}

impl SnakeGameState {
    /// Fresh game: snake centered on the grid and a first food item.
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        let grid = settings.grid();
        let snake = Snake::new(grid.center(), settings.start_direction, settings.initial_length);
        let mut state = Self::from_parts(grid, snake, None);

        match FoodSpawner::spawn(&state.grid, &state.snake, rng) {
            Ok(cell) => state.food = Some(cell),
            Err(SpawnError::NoSpaceAvailable) => {
                state.status = GameStatus::GameOver(EndReason::BoardFull);
            }
        }
        state
    }

    /// Running game from explicit pieces, used for scripted setups.
    pub fn from_parts(grid: Grid, snake: Snake, food: Option<Cell>) -> Self {
        Self {
            grid,
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            ticks: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Moves the food to `cell`. Refused for walls and snake cells.
    pub fn place_food(&mut self, cell: Cell) -> bool {
        if !self.grid.contains(cell) || self.snake.occupies(cell) {
            return false;
        }
        self.food = Some(cell);
        true
    }

    /// Turns are queued while running or paused; reversals are dropped.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        match self.status {
            GameStatus::Running | GameStatus::Paused => self.snake.set_direction(direction),
            GameStatus::GameOver(_) | GameStatus::Quit => false,
        }
    }

    pub fn toggle_pause(&mut self) -> GameStatus {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
        self.status
    }

    pub fn quit(&mut self) {
        self.status = GameStatus::Quit;
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if !self.status.is_running() {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        let will_eat = self.food == Some(self.snake.next_head());
        if will_eat {
            self.snake.grow();
        }

        let head = self.snake.advance();

        if !self.grid.contains(head) {
            return self.end(EndReason::OutOfBounds);
        }
        if self.snake.head_collides_with_self() {
            return self.end(EndReason::SelfCollision);
        }
        if !will_eat {
            return TickOutcome::Moved;
        }

        self.score += SCORE_PER_FOOD;
        log!("Ate food at ({}, {}). Score: {}", head.x, head.y, self.score);

        match FoodSpawner::spawn(&self.grid, &self.snake, rng) {
            Ok(cell) => {
                self.food = Some(cell);
                TickOutcome::Ate
            }
            Err(SpawnError::NoSpaceAvailable) => {
                self.food = None;
                self.end(EndReason::BoardFull)
            }
        }
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        self.status = GameStatus::GameOver(reason);
        TickOutcome::Ended(reason)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            field_width: self.grid.width(),
            field_height: self.grid.height(),
            snake: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
            ticks: self.ticks,
        }
    }
}
