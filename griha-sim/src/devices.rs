//! Simulated sensors and body over a shared house.
//!
//! All handles read and mutate one [`HouseState`] behind an
//! `Rc<RefCell<_>>`. The engine is single-threaded and only one handle
//! borrows at a time.

use crate::house::{House, HousePos};
use marjani::{Direction, DirtSensor, RobotBody, WallsSensor};
use std::cell::RefCell;
use std::rc::Rc;

/// Ground truth of a run: the house and where the robot really is.
#[derive(Debug)]
pub struct HouseState {
    house: House,
    robot: HousePos,
    /// Moves the body refused because the target was a wall
    bumps: u32,
    moves: u32,
}

/// Handle shared by every simulated device
pub type SharedHouse = Rc<RefCell<HouseState>>;

impl HouseState {
    /// Robot placed on the dock.
    pub fn new(house: House) -> Self {
        let robot = house.dock();
        Self {
            house,
            robot,
            bumps: 0,
            moves: 0,
        }
    }

    /// Wrap into a shared handle.
    pub fn shared(house: House) -> SharedHouse {
        Rc::new(RefCell::new(Self::new(house)))
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn robot(&self) -> HousePos {
        self.robot
    }

    pub fn bumps(&self) -> u32 {
        self.bumps
    }

    /// Accepted moves
    pub fn moves(&self) -> u32 {
        self.moves
    }
}

/// Dirt sensor reading the tile under the robot.
#[derive(Clone)]
pub struct DirtProbe(SharedHouse);

impl DirtProbe {
    pub fn new(state: SharedHouse) -> Self {
        Self(state)
    }
}

impl DirtSensor for DirtProbe {
    fn dirt_level(&self) -> u32 {
        let state = self.0.borrow();
        state.house.dirt_at(state.robot)
    }

    fn decrement_dirt(&mut self) {
        let mut state = self.0.borrow_mut();
        let pos = state.robot;
        if !state.house.clean(pos) {
            log::warn!("Cleaned ({}) but it had no dirt", pos);
        }
    }
}

/// Wall sensor probing the four neighbours.
#[derive(Clone)]
pub struct WallProbe(SharedHouse);

impl WallProbe {
    pub fn new(state: SharedHouse) -> Self {
        Self(state)
    }
}

impl WallsSensor for WallProbe {
    fn is_wall(&self, direction: Direction) -> bool {
        let state = self.0.borrow();
        state.house.is_wall(state.robot.step(direction))
    }
}

/// Robot body moving through the house.
#[derive(Clone)]
pub struct SimBody(SharedHouse);

impl SimBody {
    pub fn new(state: SharedHouse) -> Self {
        Self(state)
    }
}

impl RobotBody for SimBody {
    fn apply_move(&mut self, direction: Direction) {
        let mut state = self.0.borrow_mut();
        let target = state.robot.step(direction);
        if state.house.is_wall(target) {
            state.bumps += 1;
            log::error!(
                "Refused move {} from ({}) into wall at ({})",
                direction,
                state.robot,
                target
            );
            return;
        }
        state.robot = target;
        state.moves += 1;
    }

    fn dirt_remaining(&self) -> u32 {
        self.0.borrow().house.total_dirt()
    }
}
