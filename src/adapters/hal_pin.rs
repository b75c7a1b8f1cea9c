//! embedded-hal pump line adapter.
//!
//! Implements [`DigitalSink`] for any embedded-hal 1.0 [`OutputPin`], so
//! boards whose HAL hands out typed pin drivers (esp-idf-hal `PinDriver`,
//! rp-hal, stm32 HALs) can drive the pump without going through
//! `hw_init`.

use embedded_hal::digital::OutputPin;

use crate::app::ports::DigitalSink;
use crate::error::ActuatorError;

pub struct HalPumpLine<P> {
    pin: P,
}

impl<P: OutputPin> HalPumpLine<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the pin back, e.g. to park it before deep sleep.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> DigitalSink for HalPumpLine<P> {
    fn set_level(&mut self, high: bool) -> Result<(), ActuatorError> {
        let res = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|e| {
            log::error!("pump pin: {:?}", embedded_hal::digital::Error::kind(&e));
            ActuatorError::GpioWriteFailed
        })
    }
}
