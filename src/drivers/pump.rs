//! Water pump relay driver.
//!
//! On/off control through a single digital output (HIGH = pump on).
//! The driver is a dumb actuator: every call writes the GPIO, even when
//! the level is unchanged, and nothing is read back from the relay.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init helpers.
//! On host/test: hw_init records the level in simulation state.

use crate::drivers::hw_init;
use crate::error::ActuatorError;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    Stopped,
    Running,
}

pub struct PumpDriver {
    gpio: i32,
    state: PumpState,
    writes: u32,
}

impl PumpDriver {
    pub fn new() -> Self {
        Self::on_gpio(pins::PUMP_GPIO)
    }

    pub fn on_gpio(gpio: i32) -> Self {
        Self {
            gpio,
            state: PumpState::Stopped,
            writes: 0,
        }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        hw_init::gpio_write(self.gpio, on).map_err(|e| {
            log::error!("pump: {}", e);
            ActuatorError::GpioWriteFailed
        })?;
        self.writes = self.writes.wrapping_add(1);
        self.state = if on { PumpState::Running } else { PumpState::Stopped };
        Ok(())
    }

    /// Last commanded state (not a measurement).
    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PumpState::Running
    }

    /// Number of successful GPIO writes since construction.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl Default for PumpDriver {
    fn default() -> Self {
        Self::new()
    }
}
