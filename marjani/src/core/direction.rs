//! Movement directions on the house grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single-tile move, or staying in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +Y
    North,
    /// +X
    East,
    /// -Y
    South,
    /// -X
    West,
    /// No movement (clean, charge or idle)
    Stay,
}

impl Direction {
    /// The four moves in tie-break order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Direction that undoes this one. `Stay` is its own opposite.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Stay => Direction::Stay,
        }
    }

    /// Offset `(dx, dy)` applied by this direction.
    #[inline]
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
            Direction::Stay => (0, 0),
        }
    }

    /// True for the four cardinal moves.
    #[inline]
    pub fn is_move(self) -> bool {
        self != Direction::Stay
    }

    /// Single character representation for logs
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
            Direction::Stay => '-',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::Stay => "Stay",
        };
        f.write_str(name)
    }
}
