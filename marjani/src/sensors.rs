//! Collaborator contracts consumed by the decision engine.
//!
//! Implement these traits to connect [`DecisionEngine`](crate::DecisionEngine)
//! to a robot or a simulation. Every reading is relative to the robot's
//! current tile; the engine never sees a global map.
//!
//! # Example
//!
//! ```ignore
//! struct Bumper { /* hardware */ }
//!
//! impl WallsSensor for Bumper {
//!     fn is_wall(&self, direction: Direction) -> bool {
//!         self.probe(direction)
//!     }
//! }
//! ```

use crate::core::Direction;

/// Dirt sensor for the tile under the robot.
pub trait DirtSensor {
    /// Dirt units on the current tile.
    fn dirt_level(&self) -> u32;

    /// Remove one unit of dirt from the current tile.
    fn decrement_dirt(&mut self);
}

/// Wall sensor for the tiles adjacent to the robot.
pub trait WallsSensor {
    /// Is the neighbour in `direction` impassable?
    fn is_wall(&self, direction: Direction) -> bool;
}

/// Battery meter and charger.
pub trait BatteryMeter {
    /// Remaining charge, in moves.
    fn level(&self) -> f32;

    /// Consume one unit (one move or one cleaning action).
    fn decrease_charge(&mut self);

    /// Charge for one tick. Only called on the station.
    fn charge_battery(&mut self);

    /// Leave the charger.
    fn stop_charging(&mut self);

    /// Is the battery at capacity?
    fn is_full(&self) -> bool;
}

/// The robot body.
pub trait RobotBody {
    /// Execute a move the engine has already validated.
    fn apply_move(&mut self, direction: Direction);

    /// Dirt left in the whole house.
    ///
    /// This is the mission counter kept by the dock, not a sensor reading.
    /// The engine only uses it to decide whether a run has succeeded.
    fn dirt_remaining(&self) -> u32;
}
