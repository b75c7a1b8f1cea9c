//! Per-cycle sensor sample.

use serde::Serialize;

use crate::policy::{Decision, IrrigationPolicy};
use crate::sensors::Readings;

/// Snapshot of one cycle: three readings and the decision taken on them.
///
/// The only constructor runs the policy on the readings it is given, so
/// `irrigation_status` can never disagree with the other fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorSample {
    soil_moisture: u16,
    temperature_c: f32,
    gas_reading: u16,
    irrigation_status: bool,
}

impl SensorSample {
    /// Build a sample from this cycle's readings. Also returns the full
    /// [`Decision`] for logging.
    pub fn evaluate(readings: Readings, policy: &IrrigationPolicy) -> (Self, Decision) {
        let decision = policy.evaluate(
            readings.soil_moisture,
            readings.temperature_c,
            readings.gas_reading,
        );
        let sample = Self {
            soil_moisture: readings.soil_moisture,
            temperature_c: readings.temperature_c,
            gas_reading: readings.gas_reading,
            irrigation_status: decision.irrigate,
        };
        (sample, decision)
    }

    pub fn soil_moisture(&self) -> u16 {
        self.soil_moisture
    }

    pub fn temperature_c(&self) -> f32 {
        self.temperature_c
    }

    pub fn gas_reading(&self) -> u16 {
        self.gas_reading
    }

    pub fn irrigation_status(&self) -> bool {
        self.irrigation_status
    }
}
