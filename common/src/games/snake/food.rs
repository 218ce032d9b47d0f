use crate::games::SessionRng;
use super::grid::Grid;
use super::snake::Snake;
use super::types::Cell;

const RANDOM_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnError {
    NoSpaceAvailable,
}

impl std::fmt::Display for SpawnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnError::NoSpaceAvailable => write!(f, "No free cell left for food"),
        }
    }
}

impl std::error::Error for SpawnError {}

pub struct FoodSpawner;

impl FoodSpawner {
    /// Picks a free cell uniformly at random.
    ///
    /// Random probing is tried first since the board is mostly empty; a crowded board falls
    /// back to choosing among the enumerated free cells. Both stages are uniform over free cells.
    pub fn spawn(grid: &Grid, snake: &Snake, rng: &mut SessionRng) -> Result<Cell, SpawnError> {
        if grid.cell_count() == 0 {
            return Err(SpawnError::NoSpaceAvailable);
        }

        for _ in 0..RANDOM_ATTEMPTS {
            let x = rng.random_range(0..grid.width()) as i32;
            let y = rng.random_range(0..grid.height()) as i32;
            let cell = Cell::new(x, y);
            if !snake.occupies(cell) {
                return Ok(cell);
            }
        }

        let free: Vec<Cell> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();
        rng.pick(&free).copied().ok_or(SpawnError::NoSpaceAvailable)
    }
}
