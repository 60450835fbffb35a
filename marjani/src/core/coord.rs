//! Coordinates relative to the charging station.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::Direction;

/// Tile coordinate relative to the charging station.
///
/// `x` grows East and `y` grows North. The station itself is
/// [`RelativeCoordinate::ORIGIN`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RelativeCoordinate {
    /// East-west offset (tiles)
    pub x: i32,
    /// North-south offset (tiles)
    pub y: i32,
}

impl RelativeCoordinate {
    /// The charging station.
    pub const ORIGIN: RelativeCoordinate = RelativeCoordinate { x: 0, y: 0 };

    /// Create a new coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring tile in `direction` (`Stay` returns `self`).
    #[inline]
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.unit_vector();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The four cardinal neighbours, in tie-break order.
    #[inline]
    pub fn neighbors_4(self) -> [(Direction, RelativeCoordinate); 4] {
        Direction::CARDINAL.map(|d| (d, self.neighbor(d)))
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &RelativeCoordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Is this the charging station?
    #[inline]
    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }
}

impl Add<Direction> for RelativeCoordinate {
    type Output = Self;

    #[inline]
    fn add(self, direction: Direction) -> Self {
        self.neighbor(direction)
    }
}

impl Add for RelativeCoordinate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for RelativeCoordinate {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for RelativeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
