//! Decision engine configuration.

/// Configuration for the decision engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Ticks allowed before the run ends with `StepLimitReached`
    pub max_steps: u32,
    /// Consecutive ticks without a possible direction before a forced return
    pub stall_ticks_before_return: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            stall_ticks_before_return: 3,
        }
    }
}

impl EngineConfig {
    /// Default configuration with a custom step budget.
    pub fn with_max_steps(max_steps: u32) -> Self {
        Self {
            max_steps,
            ..Default::default()
        }
    }
}
