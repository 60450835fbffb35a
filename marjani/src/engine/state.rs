//! Engine states, actions and run outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Direction, RelativeCoordinate};

/// Terminal classification of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitCondition {
    /// No dirt left and the robot is on the station
    Success,
    /// Battery empty away from the station
    BatteryStuck,
    /// Step budget used up
    StepLimitReached,
}

impl ExitCondition {
    /// Report line for this outcome.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Success => "Success! no dirt left and robot is at the docking station.",
            Self::BatteryStuck => "Battery is empty and the robot is stuck!",
            Self::StepLimitReached => "Reached max steps allowed.",
        }
    }

    /// Short code for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::BatteryStuck => "BATTERY_STUCK",
            Self::StepLimitReached => "STEP_LIMIT",
        }
    }
}

impl fmt::Display for ExitCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Decision engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "exit", rename_all = "snake_case")]
pub enum EngineState {
    /// Moving into unknown or open territory
    Exploring,
    /// Retracing the path stack to the station
    Returning,
    /// On the station, charging until full
    Charging,
    /// Consuming dirt under the robot (lasts one tick)
    Cleaning,
    /// Run finished
    Done(ExitCondition),
}

impl EngineState {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, EngineState::Done(_))
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            EngineState::Exploring => "Exploring",
            EngineState::Returning => "Returning",
            EngineState::Charging => "Charging",
            EngineState::Cleaning => "Cleaning",
            EngineState::Done(_) => "Done",
        }
    }
}

/// What the robot did during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "direction", rename_all = "snake_case")]
pub enum Action {
    /// Exploration move (pushed onto the path stack)
    Move(Direction),
    /// Return move (popped from the path stack)
    Retrace(Direction),
    /// Consume one unit of dirt
    Clean,
    /// Charge on the station
    Charge,
    /// Idle (no possible direction)
    Stay,
}

impl Action {
    /// Direction the robot moved in (`Stay` for in-place actions).
    pub fn direction(&self) -> Direction {
        match self {
            Action::Move(d) | Action::Retrace(d) => *d,
            Action::Clean | Action::Charge | Action::Stay => Direction::Stay,
        }
    }

    /// Does this action consume one unit of battery?
    pub fn consumes_charge(&self) -> bool {
        matches!(self, Action::Move(_) | Action::Retrace(_) | Action::Clean)
    }
}

/// One entry of the step trace.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step number
    pub step: u32,
    /// Action applied during the step
    pub action: Action,
    /// Position after the step
    pub position: RelativeCoordinate,
    /// Battery level after the step
    pub battery: f32,
    /// Engine state after the step
    pub state: EngineState,
}
