//! Sensor subsystem — the [`SensorReader`] turns raw ADC counts into the
//! three readings a cycle works with.
//!
//! Soil moisture and gas are passed through unscaled; temperature goes
//! through the linear [`TemperatureCalibration`]. Each read is a single
//! conversion on the injected [`AnalogSource`]. No averaging and no state
//! is kept between cycles.

pub mod temperature;

use log::trace;

use crate::app::ports::{AnalogSource, Channel};
use crate::config::ControllerConfig;
use crate::error::SensorError;
use temperature::TemperatureCalibration;

/// The three readings taken in one cycle, before the policy has run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// Raw count, lower = wetter.
    pub soil_moisture: u16,
    pub temperature_c: f32,
    /// Raw count, higher = more gas / stress.
    pub gas_reading: u16,
}

pub struct SensorReader {
    calibration: TemperatureCalibration,
    adc_max: u16,
}

impl SensorReader {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            calibration: TemperatureCalibration::from_config(config),
            adc_max: config.adc_resolution,
        }
    }

    /// Raw moisture count, no transformation.
    pub fn read_soil_moisture(&self, adc: &mut impl AnalogSource) -> Result<u16, SensorError> {
        self.read_raw(adc, Channel::SoilMoisture)
    }

    /// Raw gas count, no transformation.
    pub fn read_gas(&self, adc: &mut impl AnalogSource) -> Result<u16, SensorError> {
        self.read_raw(adc, Channel::Gas)
    }

    /// Temperature in Celsius.
    pub fn read_temperature(&self, adc: &mut impl AnalogSource) -> Result<f32, SensorError> {
        let raw = self.read_raw(adc, Channel::Temperature)?;
        Ok(self.calibration.raw_to_celsius(raw))
    }

    /// Read every channel in cycle order: moisture, temperature, gas.
    /// The first failing channel aborts the set.
    pub fn read_all(&self, adc: &mut impl AnalogSource) -> Result<Readings, SensorError> {
        let soil_moisture = self.read_soil_moisture(adc)?;
        let temperature_c = self.read_temperature(adc)?;
        let gas_reading = self.read_gas(adc)?;
        Ok(Readings {
            soil_moisture,
            temperature_c,
            gas_reading,
        })
    }

    fn read_raw(&self, adc: &mut impl AnalogSource, channel: Channel) -> Result<u16, SensorError> {
        let raw = adc.read(channel)?;
        trace!("adc {}: {}", channel, raw);
        if raw > self.adc_max {
            return Err(SensorError::OutOfRange(channel));
        }
        Ok(raw)
    }
}
