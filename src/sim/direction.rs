//! Movement directions and the turn table
//!
//! A snake may turn 90 degrees either way but never straight back onto
//! itself. The table below is the whole state machine.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Direction the snake can travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order (used for random picks)
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Unit delta in grid space (row index grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Turn table: perpendicular turns are legal, reversal is not.
    ///
    /// Keeping the current heading is also accepted so that repeated
    /// presses of the same key are harmless.
    pub fn can_turn_to(self, next: Direction) -> bool {
        next != self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), IVec2::new(0, -1));
        assert_eq!(Direction::Down.delta(), IVec2::new(0, 1));
        assert_eq!(Direction::Left.delta(), IVec2::new(-1, 0));
        assert_eq!(Direction::Right.delta(), IVec2::new(1, 0));
    }

    #[test]
    fn test_turn_table() {
        let mut legal = 0;
        for from in Direction::ALL {
            for to in Direction::ALL {
                if from == to {
                    continue;
                }
                if from.can_turn_to(to) {
                    legal += 1;
                    assert_eq!(from.delta().dot(to.delta()), 0);
                } else {
                    assert_eq!(to, from.opposite());
                }
            }
        }
        // Up/Down <-> Left/Right, both ways
        assert_eq!(legal, 8);
    }
}
