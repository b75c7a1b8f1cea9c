//! GPIO / ADC assignments for the irrigation controller board (ESP32-S3).
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

use crate::app::ports::Channel;

// ---------------------------------------------------------------------------
// Analog inputs (ADC1, 0 – 3.1 V after the 5 V → 3.3 V divider)
// ---------------------------------------------------------------------------

/// Capacitive soil moisture probe. ADC1 channel 3 (GPIO 4).
pub const SOIL_MOISTURE_ADC_CH: u32 = 3;
/// TMP36 analog temperature sensor. ADC1 channel 4 (GPIO 5).
pub const TEMPERATURE_ADC_CH: u32 = 4;
/// MQ-135 air quality / gas sensor. ADC1 channel 5 (GPIO 6).
pub const GAS_ADC_CH: u32 = 5;

/// The ADC is read at 12 bits and shifted down to the controller's
/// 10-bit scale (0 – 1023).
pub const ADC_NATIVE_BITS: u32 = 12;
pub const ADC_REPORTED_BITS: u32 = 10;

/// ADC1 channel number for a logical sensor channel.
pub const fn adc_channel(channel: Channel) -> u32 {
    match channel {
        Channel::SoilMoisture => SOIL_MOISTURE_ADC_CH,
        Channel::Temperature => TEMPERATURE_ADC_CH,
        Channel::Gas => GAS_ADC_CH,
    }
}

// ---------------------------------------------------------------------------
// Pump relay
// ---------------------------------------------------------------------------

/// Digital output to the pump relay driver: HIGH = pump on.
pub const PUMP_GPIO: i32 = 7;
