//! The snake: body, heading, growth and speed
//!
//! `length` is the authoritative size. Moving pushes a new head and trims
//! the tail back down to `length`, so growth keeps the tail for one move
//! and shrinking drops an extra segment.

use std::collections::VecDeque;

use rand::Rng;

use super::direction::Direction;
use super::grid::{Cell, Grid};
use crate::config::SpeedTable;

/// Manual speed adjustment state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpeedOverride {
    Off,
    /// Adjusted since the last `update_speed`
    Requested,
    /// Held while the length stays at this value
    Held(usize),
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Body segments, head at index 0
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    length: usize,
    /// Ticks per second
    speed: u32,
    /// Cells given up by the last move or shrink, tail end first
    vacated: Vec<Cell>,
    speed_override: SpeedOverride,
    home: Cell,
    grid: Grid,
    speed_table: SpeedTable,
}

impl Snake {
    /// A length-1 snake at the grid center heading right
    pub fn new(grid: Grid, speed_table: SpeedTable, base_speed: u32) -> Self {
        let home = grid.center();
        Self {
            body: VecDeque::from([home]),
            direction: Direction::Right,
            pending_direction: None,
            length: 1,
            speed: base_speed,
            vacated: Vec::new(),
            speed_override: SpeedOverride::Off,
            home,
            grid,
            speed_table,
        }
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// Returns `None` for an empty body.
    pub fn with_body(
        grid: Grid,
        speed_table: SpeedTable,
        segments: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Cell> = segments
            .into_iter()
            .map(|cell| grid.wrap(cell, Cell::ZERO))
            .collect();
        if body.is_empty() {
            return None;
        }
        let speed = speed_table.speed_for(body.len());
        Some(Self {
            length: body.len(),
            body,
            direction,
            pending_direction: None,
            speed,
            vacated: Vec::new(),
            speed_override: SpeedOverride::Off,
            home: grid.center(),
            grid,
            speed_table,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Most recently vacated cell, if the last move gave one up
    pub fn last_tail(&self) -> Option<Cell> {
        self.vacated.last().copied()
    }

    /// Every cell given up since the last move (for background repaint)
    pub fn vacated(&self) -> &[Cell] {
        &self.vacated
    }

    /// Whether `cell` is one of the segments behind the head
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == cell)
    }

    /// Queue a turn for the next `apply_turn`. Reversal requests are
    /// dropped; otherwise the last request wins.
    pub fn request_turn(&mut self, direction: Direction) -> bool {
        if !self.direction.can_turn_to(direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn apply_turn(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Move one cell in the current direction, wrapping at the edges
    pub fn advance(&mut self) {
        self.vacated.clear();
        let new_head = self.grid.wrap(self.head(), self.direction.delta());
        self.body.push_front(new_head);
        self.trim();
    }

    /// Lengthen by one. If this tick's move already dropped its tail the
    /// tail comes back now, otherwise the next move keeps it.
    pub fn grow(&mut self) {
        self.length += 1;
        if self.body.len() < self.length
            && let Some(cell) = self.vacated.pop()
        {
            self.body.push_back(cell);
        }
    }

    /// Shorten by one segment, never below length 1
    pub fn shrink(&mut self) {
        if self.length > 1 {
            self.length -= 1;
            self.trim();
        }
    }

    /// Recompute speed from the length table.
    ///
    /// A manual adjustment made since the last update is kept, and then
    /// sticks until the length changes.
    pub fn update_speed(&mut self) {
        match self.speed_override {
            SpeedOverride::Requested => {
                self.speed_override = SpeedOverride::Held(self.length);
                return;
            }
            SpeedOverride::Held(length) if length == self.length => return,
            _ => {}
        }
        self.speed_override = SpeedOverride::Off;
        self.speed = self.speed_table.speed_for(self.length);
    }

    pub fn speed_up(&mut self, step: u32) {
        self.speed = self.speed.saturating_add(step);
        self.speed_override = SpeedOverride::Requested;
    }

    /// Slow down by `step`, never below `step` itself
    pub fn speed_down(&mut self, step: u32) {
        if self.speed > step {
            self.speed = (self.speed - step).max(step);
            self.speed_override = SpeedOverride::Requested;
        }
    }

    /// Back to a single segment at the grid center with a random heading
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.length = 1;
        self.body = VecDeque::from([self.home]);
        self.direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        self.pending_direction = None;
        self.vacated.clear();
        self.speed_override = SpeedOverride::Off;
    }

    fn trim(&mut self) {
        while self.body.len() > self.length {
            match self.body.pop_back() {
                Some(cell) => self.vacated.push(cell),
                None => break,
            }
        }
    }
}
