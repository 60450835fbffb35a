//! Dead-reckoned robot position relative to the charging station.

use crate::core::{Direction, RelativeCoordinate};

/// Tracks where the robot is, relative to the charging station.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionTracker {
    position: RelativeCoordinate,
}

impl PositionTracker {
    /// Start at the charging station.
    pub fn new() -> Self {
        Self {
            position: RelativeCoordinate::ORIGIN,
        }
    }

    /// Apply an accepted move. Validity is the caller's responsibility.
    #[inline]
    pub fn advance(&mut self, direction: Direction) {
        self.position = self.position + direction;
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> RelativeCoordinate {
        self.position
    }

    /// Is the robot on the charging station?
    #[inline]
    pub fn is_at_charging_station(&self) -> bool {
        self.position.is_origin()
    }

    /// Manhattan distance back to the station.
    pub fn distance_from_station(&self) -> u32 {
        self.position.manhattan_distance(&RelativeCoordinate::ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_station() {
        let tracker = PositionTracker::new();
        assert!(tracker.is_at_charging_station());
        assert_eq!(tracker.distance_from_station(), 0);
    }

    #[test]
    fn test_advance() {
        let mut tracker = PositionTracker::new();
        tracker.advance(Direction::North);
        tracker.advance(Direction::North);
        tracker.advance(Direction::West);
        assert_eq!(tracker.position(), RelativeCoordinate::new(-1, 2));
        assert!(!tracker.is_at_charging_station());
        assert_eq!(tracker.distance_from_station(), 3);

        tracker.advance(Direction::Stay);
        assert_eq!(tracker.position(), RelativeCoordinate::new(-1, 2));
    }
}
