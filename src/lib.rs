//! Wrap Snake - a grid snake game on a wrap-around board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, placement, snake, tick)
//! - `config`: Session configuration
//! - `input`: Event buffering between ticks
//! - `clock`: Fixed-rate tick scheduling at the snake's speed
//! - `renderer`: Frame capture and drawing onto a render target

pub mod clock;
pub mod config;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig, SpeedTable, SpeedTier};

/// Game configuration constants
pub mod consts {
    /// Board dimensions in cells (a 900x600 window of 20 px cells)
    pub const DEFAULT_GRID_WIDTH: i32 = 45;
    pub const DEFAULT_GRID_HEIGHT: i32 = 30;
    /// Cell edge in pixels
    pub const DEFAULT_CELL_SIZE: u32 = 20;

    /// Ticks per second before the first move
    pub const DEFAULT_BASE_SPEED: u32 = 10;
    /// Manual speed adjustment per key press
    pub const DEFAULT_SPEED_STEP: u32 = 2;
    /// Speed for snakes shorter than every speed tier
    pub const DEFAULT_FALLBACK_SPEED: u32 = 20;

    /// Maximum ticks per clock advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
