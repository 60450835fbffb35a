//! Run loop tying a house, the simulated devices and the decision engine.

use crate::battery::SimBattery;
use crate::config::SimConfig;
use crate::devices::{DirtProbe, HouseState, SharedHouse, SimBody, WallProbe};
use crate::error::{Result, SimError};
use crate::house::{House, HousePos};
use marjani::{Action, DecisionEngine, EngineState, ExitCondition};
use serde::Serialize;

type SimEngine = DecisionEngine<DirtProbe, WallProbe, SimBattery, SimBody>;

/// One step of a finished run, in house coordinates.
#[derive(Clone, Debug, Serialize)]
pub struct TraceEntry {
    pub step: u32,
    pub pos: HousePos,
    pub battery: f32,
    pub action: Action,
    pub state: EngineState,
}

/// Outcome of a run
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub house: String,
    pub dock: HousePos,
    pub max_steps: u32,
    pub max_battery: f32,
    pub steps: u32,
    pub dirt_remaining: u32,
    pub exit: ExitCondition,
    /// Moves the body refused (always 0 unless the engine misbehaves)
    pub bumps: u32,
    pub trace: Vec<TraceEntry>,
}

impl RunReport {
    /// Human readable exit line
    pub fn exit_text(&self) -> &'static str {
        self.exit.describe()
    }
}

/// A single cleaning run over one house.
pub struct Simulation {
    engine: SimEngine,
    state: SharedHouse,
    max_steps: u32,
    max_battery: f32,
}

impl Simulation {
    /// Set up a run. Config values override the house file budgets.
    pub fn new(house: House, config: &SimConfig) -> Result<Self> {
        config.validate()?;

        let max_steps = config.simulation.max_steps.unwrap_or(house.max_steps());
        let max_battery = config
            .simulation
            .max_battery
            .unwrap_or(house.max_battery());
        if !(max_battery > 0.0 && max_battery.is_finite()) {
            return Err(SimError::Config(format!(
                "max_battery must be positive, got {}",
                max_battery
            )));
        }

        log::info!(
            "House '{}': dock at ({}), {} floor tiles, {} dirt",
            house.name(),
            house.dock(),
            house.floor_count(),
            house.total_dirt()
        );
        log::info!(
            "Budget: {} steps, battery {} ({} ticks to full charge)",
            max_steps,
            max_battery,
            config.simulation.charge_ticks_to_full
        );

        let state = HouseState::shared(house);
        let engine = DecisionEngine::new(
            config.to_engine_config(max_steps),
            DirtProbe::new(state.clone()),
            WallProbe::new(state.clone()),
            SimBattery::new(max_battery, config.simulation.charge_ticks_to_full),
            SimBody::new(state.clone()),
        );

        Ok(Self {
            engine,
            state,
            max_steps,
            max_battery,
        })
    }

    /// Tick the engine to completion and collect the report.
    pub fn run(mut self) -> Result<RunReport> {
        let exit = self.engine.run()?;

        let state = self.state.borrow();
        let dock = state.house().dock();
        let trace = self
            .engine
            .trace()
            .iter()
            .map(|record| TraceEntry {
                step: record.step,
                pos: dock.offset(record.position),
                battery: record.battery,
                action: record.action,
                state: record.state,
            })
            .collect();

        if state.bumps() > 0 {
            log::error!("Body refused {} moves into walls", state.bumps());
        }
        log::info!(
            "{} after {} steps, {} dirt left",
            exit,
            self.engine.steps_taken(),
            state.house().total_dirt()
        );

        Ok(RunReport {
            house: state.house().name().to_string(),
            dock,
            max_steps: self.max_steps,
            max_battery: self.max_battery,
            steps: self.engine.steps_taken(),
            dirt_remaining: state.house().total_dirt(),
            exit,
            bumps: state.bumps(),
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = r#"
name: corridor
max_steps: 100
max_battery: 20
layout:
  - "WWWWWW"
  - "WD123W"
  - "WWWWWW"
"#;

    #[test]
    fn test_corridor_run_succeeds() {
        let house = House::from_yaml(CORRIDOR).unwrap();
        let report = Simulation::new(house, &SimConfig::default())
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(report.exit, ExitCondition::Success);
        assert_eq!(report.dirt_remaining, 0);
        assert_eq!(report.steps, 20);
        assert_eq!(report.trace.len(), 20);
        assert_eq!(report.bumps, 0);
        assert_eq!(report.dock, HousePos::new(1, 1));
        assert_eq!(report.trace[0].pos, HousePos::new(1, 2));
        assert_eq!(report.trace.last().map(|e| e.pos), Some(report.dock));
    }

    #[test]
    fn test_config_overrides_house_budget() {
        let house = House::from_yaml(CORRIDOR).unwrap();
        let mut config = SimConfig::default();
        config.simulation.max_steps = Some(3);

        let report = Simulation::new(house, &config).unwrap().run().unwrap();
        assert_eq!(report.exit, ExitCondition::StepLimitReached);
        assert_eq!(report.steps, 3);
        assert_eq!(report.max_steps, 3);
    }

    #[test]
    fn test_invalid_battery_override_rejected() {
        let house = House::from_yaml(CORRIDOR).unwrap();
        let mut config = SimConfig::default();
        config.simulation.max_battery = Some(-1.0);

        assert!(matches!(
            Simulation::new(house, &config),
            Err(SimError::Config(_))
        ));
    }
}
