//! Session state
//!
//! Everything a tick reads or writes lives here: the snake, the
//! stationary entities, respawns still waiting for a free cell, and the
//! seeded RNG.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::{EntityKind, StationaryEntity};
use super::grid::{Cell, Grid};
use super::placer::{EntityPlacer, PlacementError};
use super::snake::Snake;
use crate::config::{ConfigError, GameConfig};

/// Session construction failure
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// What killed the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    SelfCollision,
    Obstacle,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fatal collision; the snake started over
    SnakeReset { cause: CollisionKind, length: usize },
    /// The head landed on a consumable entity
    Consumed { kind: EntityKind, cell: Cell },
    /// An entity was placed on a new cell
    Respawned { id: u32, kind: EntityKind, cell: Cell },
    /// No free cell for a respawn; retried on later ticks
    SpawnFailed { id: u32, kind: EntityKind },
    SpeedChanged { from: u32, to: u32 },
    Quit,
}

/// Whether the board can still make progress
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardStatus {
    #[default]
    Running,
    /// Some consumed entities are waiting for a free cell
    Exhausted { pending: Vec<EntityKind> },
    /// A quit request ended the session
    Finished,
}

/// A consumed entity that could not be re-placed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRespawn {
    pub id: u32,
    pub kind: EntityKind,
}

/// One running game
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub grid: Grid,
    pub snake: Snake,
    /// Stationary entities (sorted by id for determinism)
    pub entities: Vec<StationaryEntity>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) pending_respawns: Vec<PendingRespawn>,
    pub(crate) rng: Pcg32,
    pub(crate) finished: bool,
    placer: EntityPlacer,
    seed: u64,
    next_id: u32,
}

impl GameSession {
    /// Start a session: snake at the center, then every entity placed
    /// around what is already on the board.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;

        let grid = Grid::new(config.grid_width, config.grid_height);
        let snake = Snake::new(grid, config.speed_table.clone(), config.base_speed);
        let mut session = Self {
            grid,
            snake,
            entities: Vec::with_capacity(config.entity_count()),
            time_ticks: 0,
            pending_respawns: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            finished: false,
            placer: EntityPlacer::new(grid),
            seed,
            next_id: 1,
            config,
        };

        let kinds = [
            (EntityKind::GoodApple, session.config.good_apples),
            (EntityKind::BadApple, session.config.bad_apples),
            (EntityKind::Obstacle, session.config.obstacles),
        ];
        for (kind, count) in kinds {
            for _ in 0..count {
                let id = session.next_entity_id();
                session.place_entity(id, kind)?;
            }
        }

        log::info!(
            "Session started: {}x{} grid, {} entities, seed {}",
            grid.width,
            grid.height,
            session.entities.len(),
            seed
        );
        Ok(session)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Union of snake segments and entity positions, rebuilt on every call
    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.snake
            .body()
            .iter()
            .copied()
            .chain(self.entities.iter().map(|e| e.position))
            .collect()
    }

    pub fn entity_at(&self, cell: Cell) -> Option<&StationaryEntity> {
        self.entities.iter().find(|e| e.position == cell)
    }

    pub fn pending_respawns(&self) -> &[PendingRespawn] {
        &self.pending_respawns
    }

    pub fn status(&self) -> BoardStatus {
        if self.finished {
            BoardStatus::Finished
        } else if self.pending_respawns.is_empty() {
            BoardStatus::Running
        } else {
            BoardStatus::Exhausted {
                pending: self.pending_respawns.iter().map(|p| p.kind).collect(),
            }
        }
    }

    /// Place an entity on a free cell against the current occupancy
    pub fn place_entity(&mut self, id: u32, kind: EntityKind) -> Result<Cell, PlacementError> {
        let occupied = self.occupied_cells();
        let position = self.placer.place(&occupied, &mut self.rng)?;
        self.entities.push(StationaryEntity { id, kind, position });
        self.normalize_order();
        Ok(position)
    }

    /// Take an entity off the board
    pub fn remove_entity(&mut self, id: u32) -> Option<StationaryEntity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.entities.sort_by_key(|e| e.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let session = GameSession::new(GameConfig::default(), 12345).unwrap();
        assert_eq!(session.snake.length(), 1);
        assert_eq!(session.snake.head(), session.grid.center());
        assert_eq!(session.entities.len(), 3);
        assert_eq!(session.status(), BoardStatus::Running);

        // Snake plus three entities, no overlap
        assert_eq!(session.occupied_cells().len(), 4);
        let kinds: Vec<_> = session.entities.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EntityKind::GoodApple, EntityKind::BadApple, EntityKind::Obstacle]
        );
    }

    #[test]
    fn test_fill_whole_board() {
        let mut config = GameConfig::new(3, 3);
        config.good_apples = 4;
        config.bad_apples = 2;
        config.obstacles = 2;
        let session = GameSession::new(config, 1).unwrap();
        assert_eq!(session.occupied_cells().len(), 9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = GameSession::new(GameConfig::new(1, 1), 1).unwrap_err();
        assert!(matches!(err, SimError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameSession::new(GameConfig::default(), 99).unwrap();
        let b = GameSession::new(GameConfig::default(), 99).unwrap();
        assert_eq!(a.entities, b.entities);
    }

    #[test]
    fn test_remove_and_replace() {
        let mut session = GameSession::new(GameConfig::small(), 5).unwrap();
        let removed = session.remove_entity(1).unwrap();
        assert_eq!(removed.kind, EntityKind::GoodApple);
        assert_eq!(session.entities.len(), 2);

        let cell = session.place_entity(removed.id, removed.kind).unwrap();
        assert_eq!(session.entity_at(cell).map(|e| e.id), Some(1));
        assert_eq!(session.entities[0].id, 1);
        assert!(session.remove_entity(42).is_none());
    }
}
