use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Smallest arena that leaves room for the starting snake and food
pub const MIN_ARENA_SIZE: usize = 7;
/// Largest arena accepted; keeps coordinates well inside `i32`
pub const MAX_ARENA_SIZE: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square arena, walls included
    pub arena_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Row of the starting snake
    pub start_row: usize,
    /// Column of the oldest starting segment; the body extends to the right
    pub start_col: usize,
    /// Food cells placed at start
    pub initial_food: usize,

    // Tick pacing
    /// First tick interval in milliseconds
    pub initial_interval_ms: f64,
    /// Amount the interval shrinks after every tick
    pub interval_step_ms: f64,
    /// The interval never drops below this
    pub min_interval_ms: f64,

    // Segment shading hints for renderers
    pub shade_ceiling: u8,
    pub shade_step: u8,
    pub shade_floor: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_size: 20,
            initial_snake_length: 3,
            start_row: 3,
            start_col: 3,
            initial_food: 5,
            initial_interval_ms: 200.0,
            interval_step_ms: 0.1,
            min_interval_ms: 100.0,
            shade_ceiling: 255,
            shade_step: 5,
            shade_floor: 100,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom arena size
    pub fn new(arena_size: usize) -> Self {
        Self {
            arena_size,
            ..Default::default()
        }
    }

    /// Create a small arena for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Parse a JSON config file without validating it, so callers can apply
    /// overrides first. Missing fields take defaults.
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json).context("Failed to parse game config")
    }

    /// Parse and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Side length of the region food is spawned in, `[2, size - 2]`
    pub fn food_region_side(&self) -> usize {
        self.arena_size.saturating_sub(3)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if !(MIN_ARENA_SIZE..=MAX_ARENA_SIZE).contains(&self.arena_size) {
            return invalid(format!(
                "arena_size must be within {MIN_ARENA_SIZE}..={MAX_ARENA_SIZE}, got {}",
                self.arena_size
            ));
        }
        if self.initial_snake_length == 0 {
            return invalid("initial_snake_length must be positive".to_string());
        }

        let last_interior = self.arena_size - 2;
        if self.start_row == 0 || self.start_row > last_interior {
            return invalid(format!(
                "start_row must be within 1..={last_interior}, got {}",
                self.start_row
            ));
        }
        let head_col = self
            .start_col
            .checked_add(self.initial_snake_length - 1)
            .filter(|col| *col <= last_interior);
        if self.start_col == 0 || head_col.is_none() {
            return invalid(format!(
                "snake from column {} with length {} does not fit inside the walls",
                self.start_col, self.initial_snake_length
            ));
        }

        let region = self.food_region_side().pow(2);
        let occupied = self.initial_food.checked_add(self.initial_snake_length);
        if occupied.is_none_or(|cells| cells > region) {
            return invalid(format!(
                "{} food cells do not fit in a {region}-cell spawn region",
                self.initial_food
            ));
        }

        if !self.interval_step_ms.is_finite() || self.interval_step_ms < 0.0 {
            return invalid("interval_step_ms must be finite and non-negative".to_string());
        }
        if !self.min_interval_ms.is_finite() || self.min_interval_ms <= 0.0 {
            return invalid("min_interval_ms must be finite and positive".to_string());
        }
        if !self.initial_interval_ms.is_finite() {
            return invalid("initial_interval_ms must be finite".to_string());
        }
        if self.min_interval_ms > self.initial_interval_ms {
            return invalid("min_interval_ms cannot exceed initial_interval_ms".to_string());
        }
        if self.shade_floor > self.shade_ceiling {
            return invalid("shade_floor cannot exceed shade_ceiling".to_string());
        }

        Ok(())
    }
}
