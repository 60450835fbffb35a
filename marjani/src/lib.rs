//! # Marjani
//!
//! Navigation engine for a grid cleaning robot that can only sense its
//! surroundings locally.
//!
//! ## Overview
//!
//! The robot starts on its charging station in an unknown house. Each tick
//! it may read:
//!
//! - the dirt level of the tile it stands on,
//! - whether each neighbouring tile is a wall,
//! - its remaining battery.
//!
//! From these readings alone the [`DecisionEngine`] builds an
//! [`ExpandingMap`], keeps a [`PathStack`] of every move since leaving the
//! station, and decides whether to clean, explore, return or charge.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marjani::{DecisionEngine, EngineConfig};
//!
//! let mut engine = DecisionEngine::new(
//!     EngineConfig::with_max_steps(500),
//!     dirt_sensor,
//!     walls_sensor,
//!     battery,
//!     body,
//! );
//! let exit = engine.run()?;
//! println!("{} after {} steps", exit, engine.steps_taken());
//! ```
//!
//! ## Coordinate System
//!
//! Positions are [`RelativeCoordinate`]s with the charging station at the
//! origin, `x` growing East and `y` growing North.

pub mod core;
pub mod engine;
pub mod error;
pub mod map;
pub mod path;
pub mod sensors;
pub mod tracker;

pub use crate::core::{Direction, RelativeCoordinate};
pub use engine::{Action, DecisionEngine, EngineConfig, EngineState, ExitCondition, StepRecord};
pub use error::{NavError, Result};
pub use map::{ExpandingMap, Tile};
pub use path::PathStack;
pub use sensors::{BatteryMeter, DirtSensor, RobotBody, WallsSensor};
pub use tracker::PositionTracker;
