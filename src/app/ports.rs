//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (ADC, pump line, log sink) implement these traits.
//! The [`AppService`](super::service::AppService) consumes them via
//! generics, so the irrigation logic never touches hardware directly and
//! can be driven with simulated readings.

use core::fmt;

use crate::error::{ActuatorError, SensorError};

use super::events::AppEvent;

/// The three analog inputs the controller samples each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    SoilMoisture,
    Temperature,
    Gas,
}

impl Channel {
    /// Dense index, used by fixed-size per-channel tables.
    pub const fn index(self) -> usize {
        match self {
            Self::SoilMoisture => 0,
            Self::Temperature => 1,
            Self::Gas => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SoilMoisture => write!(f, "soil moisture"),
            Self::Temperature => write!(f, "temperature"),
            Self::Gas => write!(f, "gas"),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Analog source (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one raw ADC conversion per call.
pub trait AnalogSource {
    /// Convert `channel` and return the raw count.
    fn read(&mut self, channel: Channel) -> Result<u16, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Digital sink (driven adapter: domain → pump line)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the pump output line.
///
/// Implementations must write the level on every call, even when it
/// matches the previous one. The line is never read back.
pub trait DigitalSink {
    /// Drive the line HIGH (`true`, pump on) or LOW (`false`, pump off).
    fn set_level(&mut self, high: bool) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go (serial log, test recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate (decouples the scheduler from the cycle)
// ───────────────────────────────────────────────────────────────

/// Callback trait that the [`CycleScheduler`](crate::scheduler::CycleScheduler)
/// invokes when an irrigation cycle is due.
///
/// The scheduler knows nothing about sensors or pumps; the delegate runs
/// the actual cycle.
pub trait SchedulerDelegate {
    /// Called once per due cycle. `cycle` counts from 1.
    fn on_cycle_due(&mut self, cycle: u64);
}
