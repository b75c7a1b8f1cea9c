//! Application events emitted by the service through [`EventSink`](super::ports::EventSink).

use crate::error::Error;
use crate::policy::Decision;

use super::sample::SensorSample;

/// First banner line, printed once at startup.
pub const BANNER_TITLE: &str = "Edge Computing Irrigation Monitoring System";
/// Rule printed under the banner title.
pub const BANNER_RULE: &str = "-------------------------------------------";

/// Notice emitted when the pump is energised.
pub const PUMP_ACTIVATED_NOTICE: &str = "IRRIGATION ACTIVATED";
/// Notice emitted when the pump is de-energised.
pub const PUMP_IDLE_NOTICE: &str = "No irrigation required";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Controller is up and the pump has been forced off.
    Started,
    /// A full reading set and its decision; emitted before actuation.
    Cycle {
        sample: SensorSample,
        decision: Decision,
    },
    /// Pump line driven HIGH.
    PumpActivated,
    /// Pump line driven LOW.
    PumpIdle,
    /// The cycle was abandoned; the pump has been driven LOW if possible.
    CycleFailed(Error),
}
