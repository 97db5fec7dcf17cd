//! Session configuration
//!
//! Fixed at session start. Loaded from a JSON file on native builds;
//! every field falls back to the classic defaults when omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Indicates an invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// One step of the length -> speed table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedTier {
    /// Applies once the snake is at least this long
    pub min_length: usize,
    /// Ticks per second at this tier
    pub speed: u32,
}

/// Length-driven speed table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedTable {
    pub tiers: Vec<SpeedTier>,
    /// Speed for lengths below every tier
    pub fallback: u32,
}

impl Default for SpeedTable {
    fn default() -> Self {
        let tiers = [(50, 5), (40, 7), (30, 10), (20, 12), (10, 15)]
            .into_iter()
            .map(|(min_length, speed)| SpeedTier { min_length, speed })
            .collect();
        Self {
            tiers,
            fallback: DEFAULT_FALLBACK_SPEED,
        }
    }
}

impl SpeedTable {
    /// Speed for a snake of the given length (highest matching tier wins)
    pub fn speed_for(&self, length: usize) -> u32 {
        self.tiers
            .iter()
            .filter(|tier| length >= tier.min_length)
            .max_by_key(|tier| tier.min_length)
            .map(|tier| tier.speed)
            .unwrap_or(self.fallback)
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid width in cells
    pub grid_width: i32,
    /// Grid height in cells
    pub grid_height: i32,
    /// Cell edge in pixels (renderer only)
    pub cell_size: u32,
    /// Speed before the first move
    pub base_speed: u32,
    /// Manual speed adjustment step (also the SpeedDown floor)
    pub speed_step: u32,
    pub speed_table: SpeedTable,
    pub good_apples: usize,
    pub bad_apples: usize,
    pub obstacles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            base_speed: DEFAULT_BASE_SPEED,
            speed_step: DEFAULT_SPEED_STEP,
            speed_table: SpeedTable::default(),
            good_apples: 1,
            bad_apples: 1,
            obstacles: 1,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Small board, handy for tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total stationary entities placed at session start
    pub fn entity_count(&self) -> usize {
        self.good_apples + self.bad_apples + self.obstacles
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(ConfigError::Invalid("grid dimensions must be positive"));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be non-zero"));
        }
        if self.base_speed == 0 {
            return Err(ConfigError::Invalid("base_speed must be non-zero"));
        }
        if self.speed_step == 0 {
            return Err(ConfigError::Invalid("speed_step must be non-zero"));
        }
        if self.speed_table.fallback == 0 || self.speed_table.tiers.iter().any(|t| t.speed == 0) {
            return Err(ConfigError::Invalid("speed table entries must be non-zero"));
        }
        let cells = (self.grid_width as usize) * (self.grid_height as usize);
        // The snake takes one cell at start
        if self.entity_count() + 1 > cells {
            return Err(ConfigError::Invalid("grid too small for snake and entities"));
        }
        Ok(())
    }
}
