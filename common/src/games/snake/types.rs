use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    OutOfBounds,
    SelfCollision,
    /// The snake filled the grid and no food can be placed.
    BoardFull,
}

impl EndReason {
    pub fn is_win(&self) -> bool {
        matches!(self, EndReason::BoardFull)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver(EndReason),
    Quit,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::GameOver(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Up,
    Down,
    Left,
    Right,
    Pause,
    Restart,
    Quit,
}

impl InputCommand {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            InputCommand::Up => Some(Direction::Up),
            InputCommand::Down => Some(Direction::Down),
            InputCommand::Left => Some(Direction::Left),
            InputCommand::Right => Some(Direction::Right),
            InputCommand::Pause | InputCommand::Restart | InputCommand::Quit => None,
        }
    }
}

impl From<Direction> for InputCommand {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => InputCommand::Up,
            Direction::Down => InputCommand::Down,
            Direction::Left => InputCommand::Left,
            Direction::Right => InputCommand::Right,
        }
    }
}
