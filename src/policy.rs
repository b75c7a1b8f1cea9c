//! Irrigation policy.
//!
//! A pure threshold rule evaluated once per cycle:
//!
//! ```text
//! irrigate = moisture < moisture_threshold
//!         || (temp > temp_threshold && gas > gas_threshold)
//! ```
//!
//! Low moisture alone is sufficient. High temperature alone never is; it
//! must coincide with a high gas/stress reading.
//!
//! ## Threshold chattering
//!
//! Comparisons are strict and there is no hysteresis band, so a reading
//! sitting on a threshold can flip the decision every cycle. This is kept
//! as-is. [`Decision::at_boundary`] flags readings that sit exactly on a
//! threshold so the effect is visible in the logs.

use serde::Serialize;

use crate::config::ControllerConfig;

/// Which branch of the rule produced the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// Soil is drier than the moisture threshold.
    LowMoisture,
    /// Soil is wet enough but heat and gas stress coincide.
    HeatAndGasStress,
    NotRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub irrigate: bool,
    pub reason: DecisionReason,
    /// A reading equals its threshold exactly.
    pub at_boundary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub moisture: u16,
    pub temp_c: f32,
    pub gas: u16,
}

impl Thresholds {
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            moisture: config.moisture_threshold,
            temp_c: config.temp_threshold_c,
            gas: config.gas_threshold,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IrrigationPolicy {
    thresholds: Thresholds,
}

impl IrrigationPolicy {
    pub fn new(config: &ControllerConfig) -> Self {
        Self::with_thresholds(Thresholds::from_config(config))
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Evaluate the rule and report which branch fired.
    /// Low moisture takes precedence when both branches hold.
    #[allow(clippy::float_cmp)]
    pub fn evaluate(&self, moisture: u16, temp_c: f32, gas: u16) -> Decision {
        let t = &self.thresholds;
        let low_moisture = moisture < t.moisture;
        let high_temperature = temp_c > t.temp_c;
        let high_gas_stress = gas > t.gas;

        let reason = if low_moisture {
            DecisionReason::LowMoisture
        } else if high_temperature && high_gas_stress {
            DecisionReason::HeatAndGasStress
        } else {
            DecisionReason::NotRequired
        };

        Decision {
            irrigate: reason != DecisionReason::NotRequired,
            reason,
            at_boundary: moisture == t.moisture || temp_c == t.temp_c || gas == t.gas,
        }
    }

    pub fn should_irrigate(&self, moisture: u16, temp_c: f32, gas: u16) -> bool {
        self.evaluate(moisture, temp_c, gas).irrigate
    }
}

impl Default for IrrigationPolicy {
    fn default() -> Self {
        Self::new(&ControllerConfig::default())
    }
}
