//! Simulated battery with linear charging.

use marjani::BatteryMeter;

/// Battery measured in moves.
///
/// Drains one unit per move or cleaning action and gains
/// `max / charge_ticks_to_full` per tick on the dock.
#[derive(Clone, Debug)]
pub struct SimBattery {
    level: f32,
    max: f32,
    charge_per_tick: f32,
    charging: bool,
}

impl SimBattery {
    /// Full battery.
    pub fn new(max: f32, charge_ticks_to_full: u32) -> Self {
        Self {
            level: max,
            max,
            charge_per_tick: max / charge_ticks_to_full.max(1) as f32,
            charging: false,
        }
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn charge_per_tick(&self) -> f32 {
        self.charge_per_tick
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }
}

impl BatteryMeter for SimBattery {
    fn level(&self) -> f32 {
        self.level
    }

    fn decrease_charge(&mut self) {
        if self.level <= 0.0 {
            log::warn!("Battery drained below empty");
        }
        self.level = (self.level - 1.0).max(0.0);
    }

    fn charge_battery(&mut self) {
        if !self.charging {
            log::debug!("Charging from {:.2}", self.level);
            self.charging = true;
        }
        let next = self.level + self.charge_per_tick;
        // Within half a tick of capacity counts as full (float rounding)
        self.level = if self.max - next < self.charge_per_tick * 0.5 {
            self.max
        } else {
            next
        };
    }

    fn stop_charging(&mut self) {
        if self.charging {
            log::debug!("Stopped charging at {:.2}", self.level);
        }
        self.charging = false;
    }

    fn is_full(&self) -> bool {
        self.level >= self.max
    }
}
