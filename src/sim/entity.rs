//! Stationary board entities (apples and obstacles)

use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// What a stationary entity does to the snake on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Grows the snake by one segment
    GoodApple,
    /// Shrinks the snake by one segment (never below length 1)
    BadApple,
    /// Fatal on contact
    Obstacle,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::GoodApple => "good apple",
            EntityKind::BadApple => "bad apple",
            EntityKind::Obstacle => "obstacle",
        }
    }
}

/// An entity occupying one cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationaryEntity {
    pub id: u32,
    pub kind: EntityKind,
    pub position: Cell,
}
