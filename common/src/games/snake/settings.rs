use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::grid::Grid;
use super::types::Direction;

pub const MIN_FIELD_SIZE: usize = 5;
pub const MAX_FIELD_SIZE: usize = 100;
pub const MIN_TICK_INTERVAL_MS: u64 = 30;
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub initial_length: usize,
    pub start_direction: Direction,
    pub tick_interval_ms: u64,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: 32,
            field_height: 24,
            initial_length: 1,
            start_direction: Direction::Right,
            tick_interval_ms: 120,
        }
    }
}

impl SnakeSettings {
    pub fn with_field(field_width: usize, field_height: usize) -> Self {
        Self {
            field_width,
            field_height,
            ..Default::default()
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.field_width, self.field_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        let size_range = MIN_FIELD_SIZE..=MAX_FIELD_SIZE;
        if !size_range.contains(&self.field_width) || !size_range.contains(&self.field_height) {
            return Err(format!(
                "Field dimensions must be between {} and {}",
                MIN_FIELD_SIZE, MAX_FIELD_SIZE
            ));
        }
        if self.initial_length == 0 {
            return Err("initial_length must be at least 1".to_string());
        }
        // The body starts at the center and trails away from the start direction.
        if self.initial_length > self.field_width.min(self.field_height) / 2 {
            return Err("initial_length must fit within half of the field".to_string());
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(format!(
                "tick_interval_ms must be between {} and {}",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            ));
        }
        Ok(())
    }
}
