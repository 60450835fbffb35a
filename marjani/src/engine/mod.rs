//! Tick-driven decision engine.
//!
//! The engine owns the robot's knowledge (map, position, path stack) and
//! its collaborators, and decides exactly one action per tick.
//!
//! # State Machine
//!
//! ```text
//!            dirt under robot
//!   ┌──────────┐ ─────────▶ ┌──────────┐
//!   │Exploring │            │ Cleaning │
//!   └──────────┘ ◀───────── └──────────┘
//!     │      ▲
//!     │ low  │ full
//!     ▼      │
//!   ┌──────────┐  station   ┌──────────┐
//!   │Returning │ ─────────▶ │ Charging │
//!   └──────────┘            └──────────┘
//!
//!   any state ──(success / stuck / step limit)──▶ Done
//! ```
//!
//! # Battery Policy
//!
//! Retracing the path stack costs one unit per entry. Before each action
//! the engine checks that the charge left afterwards still covers the
//! retrace distance:
//!
//! - a departure grows the path by one, so it needs `charge > path.len() + 1`
//!   ([`DecisionEngine::not_enough_battery`]);
//! - cleaning leaves the path as is, so it needs `charge > path.len()`
//!   ([`DecisionEngine::not_enough_to_clean`]).
//!
//! Otherwise the engine turns back. That keeps `charge >= path.len()` after
//! every tick, so a return that starts on time always reaches the station.

mod config;
mod state;

pub use config::EngineConfig;
pub use state::{Action, EngineState, ExitCondition, StepRecord};

use crate::core::{Direction, RelativeCoordinate};
use crate::error::{NavError, Result};
use crate::map::ExpandingMap;
use crate::path::PathStack;
use crate::sensors::{BatteryMeter, DirtSensor, RobotBody, WallsSensor};
use crate::tracker::PositionTracker;

/// Autonomous cleaning decision engine.
///
/// Not `Clone`: the engine is the single owner of its map, path stack and
/// collaborator handles for the lifetime of a run.
pub struct DecisionEngine<D, W, B, R> {
    config: EngineConfig,
    dirt_sensor: D,
    walls_sensor: W,
    battery: B,
    body: R,
    map: ExpandingMap,
    tracker: PositionTracker,
    path: PathStack,
    state: EngineState,
    steps_taken: u32,
    steps_since_charge: u32,
    /// Consecutive ticks with no possible direction
    stalled_ticks: u32,
    trace: Vec<StepRecord>,
}

impl<D, W, B, R> DecisionEngine<D, W, B, R>
where
    D: DirtSensor,
    W: WallsSensor,
    B: BatteryMeter,
    R: RobotBody,
{
    /// Create an engine with the robot on the charging station.
    pub fn new(config: EngineConfig, dirt_sensor: D, walls_sensor: W, battery: B, body: R) -> Self {
        let mut map = ExpandingMap::new();
        map.register_charging_station(RelativeCoordinate::ORIGIN);

        Self {
            trace: Vec::with_capacity(config.max_steps.min(4096) as usize),
            config,
            dirt_sensor,
            walls_sensor,
            battery,
            body,
            map,
            tracker: PositionTracker::new(),
            path: PathStack::new(),
            state: EngineState::Exploring,
            steps_taken: 0,
            steps_since_charge: 0,
            stalled_ticks: 0,
        }
    }

    /// Tick until the run reaches a terminal state.
    ///
    /// Terminates within `max_steps` ticks.
    pub fn run(&mut self) -> Result<ExitCondition> {
        loop {
            if let EngineState::Done(exit) = self.tick()? {
                return Ok(exit);
            }
        }
    }

    /// Decide and apply one action.
    ///
    /// Returns the state after the tick. Once `Done`, further ticks are
    /// no-ops that do not touch any collaborator.
    pub fn tick(&mut self) -> Result<EngineState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        if let Some(exit) = self.check_exit() {
            log::info!(
                "Run finished after {} steps: {} (battery {:.1}, dirt left {})",
                self.steps_taken,
                exit.code(),
                self.battery.level(),
                self.body.dirt_remaining()
            );
            log::debug!(
                "Final map:\n{}",
                self.map.render_ascii(self.tracker.position())
            );
            self.state = EngineState::Done(exit);
            return Ok(self.state);
        }

        let action = self.decide()?;
        self.apply(action)?;
        self.steps_taken += 1;

        let record = StepRecord {
            step: self.steps_taken,
            action,
            position: self.tracker.position(),
            battery: self.battery.level(),
            state: self.state,
        };
        log::debug!(
            "Step {}: {:?} -> {} battery {:.1} [{}]",
            record.step,
            record.action,
            record.position,
            record.battery,
            record.state.name()
        );
        self.trace.push(record);

        Ok(self.state)
    }

    /// Terminal checks, in priority order.
    fn check_exit(&self) -> Option<ExitCondition> {
        let at_station = self.tracker.is_at_charging_station();

        if at_station && self.body.dirt_remaining() == 0 {
            Some(ExitCondition::Success)
        } else if !at_station && self.battery.level() <= 0.0 {
            Some(ExitCondition::BatteryStuck)
        } else if self.steps_taken >= self.config.max_steps {
            Some(ExitCondition::StepLimitReached)
        } else {
            None
        }
    }

    /// True when one more departure would leave too little charge to retrace.
    pub fn not_enough_battery(&self) -> bool {
        self.battery.level() <= (self.path.len() + 1) as f32
    }

    /// True when cleaning here would leave too little charge to retrace.
    pub fn not_enough_to_clean(&self) -> bool {
        self.battery.level() <= self.path.len() as f32
    }

    /// Battery check for the action the current tile calls for.
    fn must_turn_back(&self, dirt: u32) -> bool {
        if dirt > 0 {
            self.not_enough_to_clean()
        } else {
            self.not_enough_battery()
        }
    }

    fn decide(&mut self) -> Result<Action> {
        let dirt = self.observe_current_tile()?;
        let at_station = self.tracker.is_at_charging_station();

        if at_station {
            let resting = matches!(
                self.state,
                EngineState::Returning | EngineState::Charging
            );
            let short = self.must_turn_back(dirt);

            if (resting || short) && !self.battery.is_full() {
                if self.state != EngineState::Charging {
                    log::info!(
                        "Docked with battery {:.1}, charging",
                        self.battery.level()
                    );
                }
                self.state = EngineState::Charging;
                return Ok(Action::Charge);
            }

            if resting {
                log::info!("Battery full, resuming exploration");
            }
            self.state = EngineState::Exploring;

            if short {
                // Even a full battery cannot cover a round trip
                log::warn!(
                    "Battery capacity {:.1} too small to leave the station",
                    self.battery.level()
                );
                return Ok(Action::Stay);
            }
        } else if self.state == EngineState::Returning || self.must_turn_back(dirt) {
            return self.retrace();
        }

        if dirt > 0 {
            self.state = EngineState::Cleaning;
            return Ok(Action::Clean);
        }

        let possible = self.possible_directions();
        match self.select_direction(&possible) {
            Some(direction) => {
                self.stalled_ticks = 0;
                self.state = EngineState::Exploring;
                Ok(Action::Move(direction))
            }
            None => {
                self.stalled_ticks += 1;
                log::warn!(
                    "No possible direction at {} ({} consecutive ticks)",
                    self.tracker.position(),
                    self.stalled_ticks
                );
                if !at_station && self.stalled_ticks >= self.config.stall_ticks_before_return {
                    return self.retrace();
                }
                self.state = EngineState::Exploring;
                Ok(Action::Stay)
            }
        }
    }

    /// Record floor and dirt for the tile under the robot.
    fn observe_current_tile(&mut self) -> Result<u32> {
        let here = self.tracker.position();
        if self.map.is_known_wall(here) {
            return Err(NavError::InvariantViolation(format!(
                "robot is on {here}, which is recorded as a wall"
            )));
        }

        self.map.record_floor(here);
        let dirt = self.dirt_sensor.dirt_level();
        self.map.record_dirt(here, dirt);
        Ok(dirt)
    }

    fn retrace(&mut self) -> Result<Action> {
        if self.state != EngineState::Returning {
            log::info!(
                "Battery {:.1} vs retrace distance {}, returning to station",
                self.battery.level(),
                self.path.len()
            );
            self.state = EngineState::Returning;
        }

        let direction = self.path.next_retrace_step().map_err(|_| {
            NavError::InvariantViolation(format!(
                "path stack empty while retracing from {}",
                self.tracker.position()
            ))
        })?;
        Ok(Action::Retrace(direction))
    }

    /// Neighbours not known to be walls, probing the sensor for the rest.
    fn possible_directions(&mut self) -> Vec<Direction> {
        let here = self.tracker.position();
        let mut possible = Vec::with_capacity(4);

        for (direction, target) in here.neighbors_4() {
            if self.map.is_known_wall(target) {
                continue;
            }
            if self.walls_sensor.is_wall(direction) {
                if self.map.record_wall(here, direction) {
                    log::trace!("Wall discovered at {}", target);
                }
                continue;
            }
            possible.push(direction);
        }

        possible
    }

    /// Prefer unvisited tiles; ties go to the first in N, E, S, W order.
    fn select_direction(&self, possible: &[Direction]) -> Option<Direction> {
        let here = self.tracker.position();
        possible
            .iter()
            .copied()
            .find(|&d| !self.map.is_visited(here + d))
            .or_else(|| possible.first().copied())
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Move(direction) => {
                self.move_robot(direction);
                self.path.record_departure(direction);
                if self.tracker.is_at_charging_station() {
                    // Looped back to the dock: the route so far is irrelevant
                    self.path.clear();
                }
            }
            Action::Retrace(direction) => {
                self.move_robot(direction);
                self.check_retrace_consistency()?;
            }
            Action::Clean => {
                self.dirt_sensor.decrement_dirt();
                self.battery.decrease_charge();
                self.steps_since_charge += 1;
                let here = self.tracker.position();
                self.map.record_dirt(here, self.dirt_sensor.dirt_level());
            }
            Action::Charge => {
                self.battery.charge_battery();
                self.steps_since_charge = 0;
            }
            Action::Stay => {}
        }
        Ok(())
    }

    fn move_robot(&mut self, direction: Direction) {
        if self.tracker.is_at_charging_station() {
            self.battery.stop_charging();
        }
        self.body.apply_move(direction);
        self.tracker.advance(direction);
        self.battery.decrease_charge();
        self.steps_since_charge += 1;
        self.map.record_floor(self.tracker.position());
    }

    fn check_retrace_consistency(&self) -> Result<()> {
        let at_station = self.tracker.is_at_charging_station();
        if at_station != self.path.is_empty() {
            return Err(NavError::InvariantViolation(format!(
                "at {} with {} retrace steps left",
                self.tracker.position(),
                self.path.len()
            )));
        }
        if at_station {
            log::info!("Back on the station with battery {:.1}", self.battery.level());
        }
        Ok(())
    }

    /// Current engine state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Exit condition, once the run is over.
    pub fn exit_condition(&self) -> Option<ExitCondition> {
        match self.state {
            EngineState::Done(exit) => Some(exit),
            _ => None,
        }
    }

    /// Has the run finished?
    pub fn is_done(&self) -> bool {
        self.state.is_terminal()
    }

    /// Ticks applied so far.
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Battery-consuming ticks since the last charge.
    pub fn steps_since_charge(&self) -> u32 {
        self.steps_since_charge
    }

    /// Position relative to the charging station.
    pub fn position(&self) -> RelativeCoordinate {
        self.tracker.position()
    }

    /// Everything learned about the house so far.
    pub fn map(&self) -> &ExpandingMap {
        &self.map
    }

    /// Route back to the station.
    pub fn path(&self) -> &PathStack {
        &self.path
    }

    /// One record per applied tick.
    pub fn trace(&self) -> &[StepRecord] {
        &self.trace
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Battery handle
    pub fn battery(&self) -> &B {
        &self.battery
    }

    /// Body handle
    pub fn body(&self) -> &R {
        &self.body
    }
}
