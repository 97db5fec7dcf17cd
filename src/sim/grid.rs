//! Grid addressing with wrap-around edges
//!
//! Cells are `IVec2` (x = column, y = row). Leaving one edge re-enters
//! from the opposite one on both axes.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A single addressable grid cell
pub type Cell = IVec2;

/// Fixed-size toroidal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self { width, height }
    }

    /// Add `delta` to `cell`, wrapping each axis into the grid
    #[inline]
    pub fn wrap(&self, cell: Cell, delta: IVec2) -> Cell {
        let moved = cell + delta;
        IVec2::new(
            moved.x.rem_euclid(self.width),
            moved.y.rem_euclid(self.height),
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn center(&self) -> Cell {
        IVec2::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Every cell on the grid in row-major order.
    ///
    /// The order is stable so seeded placement is reproducible.
    pub fn all_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| IVec2::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_wrap_edges() {
        let grid = Grid::new(45, 30);
        assert_eq!(
            grid.wrap(IVec2::new(44, 3), Direction::Right.delta()),
            IVec2::new(0, 3)
        );
        assert_eq!(
            grid.wrap(IVec2::new(0, 3), Direction::Left.delta()),
            IVec2::new(44, 3)
        );
        assert_eq!(
            grid.wrap(IVec2::new(7, 0), Direction::Up.delta()),
            IVec2::new(7, 29)
        );
        assert_eq!(
            grid.wrap(IVec2::new(7, 29), Direction::Down.delta()),
            IVec2::new(7, 0)
        );
    }

    #[test]
    fn test_all_cells() {
        let grid = Grid::new(4, 3);
        let cells: Vec<_> = grid.all_cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells.iter().collect::<HashSet<_>>().len(), 12);
        assert_eq!(cells[0], IVec2::new(0, 0));
        assert_eq!(cells[4], IVec2::new(0, 1));
        assert!(cells.iter().all(|c| grid.contains(*c)));
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(45, 30).center(), IVec2::new(22, 15));
        assert_eq!(Grid::new(1, 1).center(), IVec2::ZERO);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn wrap_stays_on_grid(
            w in 1i32..64,
            h in 1i32..64,
            x in 0i32..64,
            y in 0i32..64,
            dir in direction(),
        ) {
            let grid = Grid::new(w, h);
            let cell = IVec2::new(x % w, y % h);
            prop_assert!(grid.contains(grid.wrap(cell, dir.delta())));
        }

        #[test]
        fn full_lap_returns_home(
            w in 1i32..64,
            h in 1i32..64,
            x in 0i32..64,
            y in 0i32..64,
            dir in direction(),
        ) {
            let grid = Grid::new(w, h);
            let start = IVec2::new(x % w, y % h);
            let steps = if dir.delta().x != 0 { w } else { h };
            let mut cell = start;
            for _ in 0..steps {
                cell = grid.wrap(cell, dir.delta());
            }
            prop_assert_eq!(cell, start);
        }
    }
}
