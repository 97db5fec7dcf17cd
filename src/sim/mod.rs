//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per external clock tick
//! - Seeded RNG only
//! - Stable iteration order (row-major cells, entities by ID)
//! - No rendering, timing or platform dependencies

pub mod direction;
pub mod entity;
pub mod grid;
pub mod placer;
pub mod snake;
pub mod state;
pub mod tick;

pub use direction::Direction;
pub use entity::{EntityKind, StationaryEntity};
pub use grid::{Cell, Grid};
pub use placer::{EntityPlacer, PlacementError};
pub use snake::Snake;
pub use state::{BoardStatus, CollisionKind, GameEvent, GameSession, PendingRespawn, SimError};
pub use tick::{TickInput, TickReport, tick};
