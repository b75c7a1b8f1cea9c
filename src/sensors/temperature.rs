//! Linear analog temperature sensor (TMP36 family).
//!
//! The sensor outputs `offset + T / slope` volts; with the default
//! calibration that is 0.5 V at 0 °C and 10 mV/°C. The conversion is a
//! fixed affine map and is not validated against any particular datasheet,
//! so every constant is carried in [`TemperatureCalibration`] and can be
//! replaced from configuration.

use crate::config::ControllerConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureCalibration {
    /// ADC reference voltage.
    pub v_ref: f32,
    /// Full-scale raw count.
    pub adc_max: u16,
    /// Sensor output at 0 °C.
    pub offset_v: f32,
    /// °C per volt above the offset.
    pub slope_c_per_v: f32,
}

impl TemperatureCalibration {
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            v_ref: config.voltage_ref,
            adc_max: config.adc_resolution,
            offset_v: config.temp_offset_v,
            slope_c_per_v: config.temp_slope_c_per_v,
        }
    }

    pub fn raw_to_volts(&self, raw: u16) -> f32 {
        raw as f32 * (self.v_ref / self.adc_max as f32)
    }

    pub fn raw_to_celsius(&self, raw: u16) -> f32 {
        (self.raw_to_volts(raw) - self.offset_v) * self.slope_c_per_v
    }
}

impl Default for TemperatureCalibration {
    fn default() -> Self {
        Self::from_config(&ControllerConfig::default())
    }
}
