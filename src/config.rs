//! Controller configuration parameters
//!
//! Every tunable that the irrigation loop depends on lives here and is
//! passed explicitly into the sensor reader, the policy, and the scheduler.
//! Defaults reproduce the field-deployed constants. Values can be supplied
//! as JSON by a host harness; nothing is persisted across power cycles.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How the cycle logger renders each sensor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Multi-line labelled text record.
    #[default]
    Text,
    /// One JSON object per cycle.
    Json,
}

/// Core controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // --- Policy thresholds ---
    /// Raw moisture reading below which the soil counts as dry.
    pub moisture_threshold: u16,
    /// Temperature (Celsius) above which heat stress is assumed.
    pub temp_threshold_c: f32,
    /// Raw gas reading above which environmental stress is assumed.
    pub gas_threshold: u16,

    // --- ADC ---
    /// ADC reference voltage (volts).
    pub voltage_ref: f32,
    /// Largest raw value the ADC returns (1023 for 10-bit).
    pub adc_resolution: u16,

    // --- Temperature calibration ---
    /// Sensor output at 0 °C (volts).
    pub temp_offset_v: f32,
    /// Sensor gain (°C per volt).
    pub temp_slope_c_per_v: f32,

    // --- Timing ---
    /// Time between irrigation cycles (milliseconds).
    pub sampling_interval_ms: u32,

    // --- Logging ---
    pub record_format: RecordFormat,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Thresholds
            moisture_threshold: 300,
            temp_threshold_c: 30.0,
            gas_threshold: 400,

            // ADC
            voltage_ref: 5.0,
            adc_resolution: 1023, // 10-bit

            // TMP36-style linear sensor
            temp_offset_v: 0.5,
            temp_slope_c_per_v: 100.0,

            // Timing
            sampling_interval_ms: 5000,

            record_format: RecordFormat::Text,
        }
    }
}

impl ControllerConfig {
    /// Parse a JSON document. Missing fields fall back to the defaults.
    /// The result is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the controller meaningless.
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adc_resolution == 0 {
            return Err(ConfigError::ValidationFailed("adc_resolution must be non-zero"));
        }
        if !self.voltage_ref.is_finite() || self.voltage_ref <= 0.0 {
            return Err(ConfigError::ValidationFailed("voltage_ref must be a positive voltage"));
        }
        if !self.temp_offset_v.is_finite() {
            return Err(ConfigError::ValidationFailed("temp_offset_v must be finite"));
        }
        if !self.temp_slope_c_per_v.is_finite() || self.temp_slope_c_per_v == 0.0 {
            return Err(ConfigError::ValidationFailed("temp_slope_c_per_v must be finite and non-zero"));
        }
        if !self.temp_threshold_c.is_finite() {
            return Err(ConfigError::ValidationFailed("temp_threshold_c must be finite"));
        }
        if self.moisture_threshold > self.adc_resolution {
            return Err(ConfigError::ValidationFailed("moisture_threshold exceeds ADC range"));
        }
        if self.gas_threshold > self.adc_resolution {
            return Err(ConfigError::ValidationFailed("gas_threshold exceeds ADC range"));
        }
        if self.sampling_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("sampling_interval_ms must be non-zero"));
        }
        Ok(())
    }
}

/// Errors from loading or validating a [`ControllerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON for this schema.
    Malformed,
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "config malformed"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl core::error::Error for ConfigError {}
