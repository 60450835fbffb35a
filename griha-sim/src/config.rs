//! Configuration loading for GrihaSim

use crate::error::{Result, SimError};
use marjani::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SimConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Run parameters
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Step budget; overrides the house file when set
    #[serde(default)]
    pub max_steps: Option<u32>,

    /// Battery capacity; overrides the house file when set
    #[serde(default)]
    pub max_battery: Option<f32>,

    /// Charging ticks needed to go from empty to full (default: 20)
    #[serde(default = "default_charge_ticks_to_full")]
    pub charge_ticks_to_full: u32,

    /// Ticks without a possible move before the robot heads home (default: 3)
    #[serde(default = "default_stall_ticks_before_return")]
    pub stall_ticks_before_return: u32,
}

/// Output files
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Step list with the final tally and exit condition
    #[serde(default = "default_summary_path")]
    pub summary_path: String,

    /// Positions and battery per step, for visualisation
    #[serde(default = "default_trace_path")]
    pub trace_path: String,

    /// Full run report as YAML (disabled when empty)
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

/// Logging configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset (default: info)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            max_battery: None,
            charge_ticks_to_full: default_charge_ticks_to_full(),
            stall_ticks_before_return: default_stall_ticks_before_return(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_path: default_summary_path(),
            trace_path: default_trace_path(),
            report_path: default_report_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_charge_ticks_to_full() -> u32 {
    20
}
fn default_stall_ticks_before_return() -> u32 {
    3
}
fn default_summary_path() -> String {
    "output/summary.txt".to_string()
}
fn default_trace_path() -> String {
    "output/moves.txt".to_string()
}
fn default_report_path() -> String {
    "output/report.yaml".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: SimConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.simulation.charge_ticks_to_full == 0 {
            return Err(SimError::Config(
                "charge_ticks_to_full must be at least 1".to_string(),
            ));
        }
        if let Some(max_battery) = self.simulation.max_battery
            && !(max_battery > 0.0 && max_battery.is_finite())
        {
            return Err(SimError::Config(format!(
                "max_battery must be positive, got {}",
                max_battery
            )));
        }
        Ok(())
    }

    /// Engine settings for a run with the given step budget.
    pub fn to_engine_config(&self, max_steps: u32) -> EngineConfig {
        EngineConfig {
            max_steps,
            stall_ticks_before_return: self.simulation.stall_ticks_before_return,
        }
    }
}

impl OutputConfig {
    /// Same file names, placed under `dir`.
    pub fn in_dir(&self, dir: &Path) -> Self {
        let rebase = |path: &str| -> String {
            if path.is_empty() {
                return String::new();
            }
            let name = Path::new(path)
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| path.into());
            dir.join(name).to_string_lossy().into_owned()
        };

        Self {
            summary_path: rebase(&self.summary_path),
            trace_path: rebase(&self.trace_path),
            report_path: rebase(&self.report_path),
        }
    }
}
