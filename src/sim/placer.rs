//! Free-cell selection for stationary entities

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IteratorRandom;
use thiserror::Error;

use super::grid::{Cell, Grid};

/// Placement failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Every cell on the grid is already taken
    #[error("no free cell left on a {width}x{height} grid")]
    ExhaustedGrid { width: i32, height: i32 },
}

/// Picks unoccupied cells uniformly at random.
///
/// Selection only; the caller registers the returned cell as occupied.
#[derive(Debug, Clone, Copy)]
pub struct EntityPlacer {
    grid: Grid,
}

impl EntityPlacer {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn place<R: Rng + ?Sized>(
        &self,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<Cell, PlacementError> {
        self.grid
            .all_cells()
            .filter(|cell| !occupied.contains(cell))
            .choose(rng)
            .ok_or(PlacementError::ExhaustedGrid {
                width: self.grid.width,
                height: self.grid.height,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_last_free_cell_is_found() {
        let grid = Grid::new(3, 3);
        let placer = EntityPlacer::new(grid);
        let free = IVec2::new(2, 1);
        let occupied: HashSet<Cell> = grid.all_cells().filter(|c| *c != free).collect();

        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(placer.place(&occupied, &mut rng), Ok(free));
    }

    #[test]
    fn test_exhausted_grid() {
        let grid = Grid::new(2, 2);
        let placer = EntityPlacer::new(grid);
        let occupied: HashSet<Cell> = grid.all_cells().collect();

        let mut rng = Pcg32::seed_from_u64(7);
        let err = placer.place(&occupied, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PlacementError::ExhaustedGrid {
                width: 2,
                height: 2
            }
        );
        assert_eq!(err.to_string(), "no free cell left on a 2x2 grid");
    }

    #[test]
    fn test_same_seed_same_cell() {
        let placer = EntityPlacer::new(Grid::new(45, 30));
        let occupied = HashSet::from([IVec2::new(22, 15)]);

        let a = placer.place(&occupied, &mut Pcg32::seed_from_u64(42));
        let b = placer.place(&occupied, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_placement_spreads_over_free_cells() {
        let grid = Grid::new(3, 1);
        let placer = EntityPlacer::new(grid);
        let occupied = HashSet::from([IVec2::new(1, 0)]);
        let mut rng = Pcg32::seed_from_u64(1);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(placer.place(&occupied, &mut rng).unwrap());
        }
        assert_eq!(seen, HashSet::from([IVec2::new(0, 0), IVec2::new(2, 0)]));
    }

    proptest! {
        #[test]
        fn placed_cell_is_free(
            seed in any::<u64>(),
            w in 1i32..12,
            h in 1i32..12,
            taken in prop::collection::vec((0i32..12, 0i32..12), 0..100),
        ) {
            let grid = Grid::new(w, h);
            let placer = EntityPlacer::new(grid);
            let occupied: HashSet<Cell> = taken
                .into_iter()
                .map(|(x, y)| IVec2::new(x % w, y % h))
                .collect();
            let mut rng = Pcg32::seed_from_u64(seed);

            match placer.place(&occupied, &mut rng) {
                Ok(cell) => {
                    prop_assert!(grid.contains(cell));
                    prop_assert!(!occupied.contains(&cell));
                }
                Err(PlacementError::ExhaustedGrid { .. }) => {
                    prop_assert_eq!(occupied.len(), grid.cell_count());
                }
            }
        }
    }
}
