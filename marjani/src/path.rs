//! Backtrack stack of directions taken since leaving the charging station.
//!
//! Popping every entry and applying its opposite walks the robot back to
//! the station along the exact route it came.

use crate::core::Direction;
use crate::error::{NavError, Result};

/// LIFO of exploration moves since the last departure from the station.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathStack {
    steps: Vec<Direction>,
}

impl PathStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            steps: Vec::with_capacity(64),
        }
    }

    /// Remember an exploration move. `Stay` is not a departure.
    pub fn record_departure(&mut self, direction: Direction) {
        if direction.is_move() {
            self.steps.push(direction);
        }
    }

    /// Pop the latest move and return the direction that undoes it.
    pub fn next_retrace_step(&mut self) -> Result<Direction> {
        self.steps
            .pop()
            .map(Direction::opposite)
            .ok_or(NavError::EmptyPathStack)
    }

    /// Latest recorded move without removing it.
    pub fn peek(&self) -> Option<Direction> {
        self.steps.last().copied()
    }

    /// Number of moves needed to get back to the station.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True while at the station.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Forget the route (the robot is back on the station).
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}
