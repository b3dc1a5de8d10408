use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const GRID_SIZE: usize = 15;
pub const BASE_TICK_INTERVAL_MS: u64 = 150;
pub const MAX_SPEEDUP_MS: u64 = 100;
pub const MIN_TICK_INTERVAL_MS: u64 = 50;
pub const POINTS_PER_FOOD: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub grid_size: usize,
    pub base_tick_interval_ms: u64,
    pub max_speedup_ms: u64,
    pub min_tick_interval_ms: u64,
    pub points_per_food: u32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            base_tick_interval_ms: BASE_TICK_INTERVAL_MS,
            max_speedup_ms: MAX_SPEEDUP_MS,
            min_tick_interval_ms: MIN_TICK_INTERVAL_MS,
            points_per_food: POINTS_PER_FOOD,
        }
    }
}

impl SnakeSettings {
    /// Head position of a fresh session: (7, 7) on the default grid.
    pub fn start_position(&self) -> (usize, usize) {
        (self.grid_size / 2, self.grid_size / 2)
    }

    /// Food position of a fresh session: (10, 10) on the default grid.
    pub fn initial_food_position(&self) -> (usize, usize) {
        let offset = self.grid_size * 2 / 3;
        (offset, offset)
    }

    /// Speeds up by one millisecond per point until `max_speedup_ms`, never below the floor.
    pub fn tick_interval(&self, score: u32) -> Duration {
        let speedup = (score as u64).min(self.max_speedup_ms);
        let interval_ms = self
            .base_tick_interval_ms
            .saturating_sub(speedup)
            .max(self.min_tick_interval_ms);
        Duration::from_millis(interval_ms)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.grid_size) {
            return Err("Grid size must be between 5 and 100".to_string());
        }
        if self.base_tick_interval_ms < 10 || self.base_tick_interval_ms > 5000 {
            return Err("Base tick interval must be between 10ms and 5000ms".to_string());
        }
        if self.min_tick_interval_ms == 0 {
            return Err("Minimum tick interval must be positive".to_string());
        }
        if self.min_tick_interval_ms > self.base_tick_interval_ms {
            return Err("Minimum tick interval must not exceed the base interval".to_string());
        }
        if self.points_per_food == 0 {
            return Err("Points per food must be positive".to_string());
        }
        Ok(())
    }
}
