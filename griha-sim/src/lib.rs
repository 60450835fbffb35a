//! # GrihaSim
//!
//! Grid house simulator for the [`marjani`] cleaning robot engine.
//!
//! A house is loaded from a YAML layout, simulated sensors, battery and body
//! are wired to the decision engine over shared house state, and the run is
//! ticked until the engine reports an exit condition. The result is written
//! as a trace file, a summary file and a YAML report.
//!
//! ```rust,ignore
//! use griha_sim::{House, SimConfig, Simulation};
//!
//! let house = House::load("houses/small_room.yaml")?;
//! let config = SimConfig::default();
//! let report = Simulation::new(house, &config)?.run()?;
//! griha_sim::report::write_all(&report, &config.output)?;
//! ```

pub mod battery;
pub mod config;
pub mod devices;
pub mod error;
pub mod house;
pub mod report;
pub mod simulation;

pub use battery::SimBattery;
pub use config::{LoggingConfig, OutputConfig, SimConfig, SimulationConfig};
pub use devices::{DirtProbe, HouseState, SharedHouse, SimBody, WallProbe};
pub use error::{Result, SimError};
pub use house::{Cell, House, HouseFile, HousePos};
pub use simulation::{RunReport, Simulation, TraceEntry};
