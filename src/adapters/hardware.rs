//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the pump driver and reads the ADC through `hw_init`, exposing
//! both through [`AnalogSource`] and [`DigitalSink`]. This is the only
//! module in the system that touches actual hardware.  On non-espidf
//! targets, the underlying helpers use cfg-gated simulation stubs.

use crate::app::ports::{AnalogSource, Channel, DigitalSink};
use crate::drivers::hw_init;
use crate::drivers::pump::PumpDriver;
use crate::error::{ActuatorError, SensorError};
use crate::pins;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    pump: PumpDriver,
}

impl HardwareAdapter {
    pub fn new(pump: PumpDriver) -> Self {
        Self { pump }
    }

    pub fn pump(&self) -> &PumpDriver {
        &self.pump
    }
}

// ── AnalogSource implementation ───────────────────────────────

impl AnalogSource for HardwareAdapter {
    fn read(&mut self, channel: Channel) -> Result<u16, SensorError> {
        hw_init::adc1_read(pins::adc_channel(channel)).map_err(|e| {
            log::warn!("{} channel: {}", channel, e);
            SensorError::AdcReadFailed(channel)
        })
    }
}

// ── DigitalSink implementation ────────────────────────────────

impl DigitalSink for HardwareAdapter {
    fn set_level(&mut self, high: bool) -> Result<(), ActuatorError> {
        self.pump.set(high)
    }
}
