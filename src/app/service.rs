//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the sensor reader and the irrigation policy and runs
//! one sample → decide → log → actuate cycle per [`tick`](AppService::tick).
//! All I/O flows through port traits injected at call sites, making the
//! whole cycle testable with mock adapters.
//!
//! ```text
//!  AnalogSource ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                   │       AppService        │
//!   DigitalSink ◀── │  Reader · Policy        │
//!                   └────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::ControllerConfig;
use crate::error::{ActuatorError, Result};
use crate::policy::{Decision, IrrigationPolicy};
use crate::sensors::SensorReader;

use super::events::AppEvent;
use super::ports::{AnalogSource, DigitalSink, EventSink};
use super::sample::SensorSample;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates the irrigation cycle.
pub struct AppService {
    sampling_interval_ms: u32,
    reader: SensorReader,
    policy: IrrigationPolicy,
    tick_count: u64,
    failed_cycles: u64,
}

impl AppService {
    /// Construct the service from a validated configuration.
    ///
    /// Does **not** touch the pump — call [`start`](Self::start) next.
    pub fn new(config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        let reader = SensorReader::new(&config);
        let policy = IrrigationPolicy::new(&config);
        Ok(Self {
            sampling_interval_ms: config.sampling_interval_ms,
            reader,
            policy,
            tick_count: 0,
            failed_cycles: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force the pump off and print the startup banner.
    pub fn start(&mut self, pump: &mut impl DigitalSink, sink: &mut impl EventSink) -> Result<()> {
        pump.set_level(false)?;
        sink.emit(&AppEvent::Started);
        let t = self.policy.thresholds();
        info!(
            "AppService started (every {} ms, moisture<{} | temp>{:.1}C & gas>{})",
            self.sampling_interval_ms, t.moisture, t.temp_c, t.gas,
        );
        Ok(())
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full cycle: read sensors → evaluate → log → actuate.
    ///
    /// The `hw` parameter satisfies **both** [`AnalogSource`] and
    /// [`DigitalSink`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    ///
    /// On a read failure no sample is produced: the pump is driven LOW,
    /// [`AppEvent::CycleFailed`] is emitted, and the error is returned.
    /// The next tick starts from scratch.
    pub fn tick(
        &mut self,
        hw: &mut (impl AnalogSource + DigitalSink),
        sink: &mut impl EventSink,
    ) -> Result<SensorSample> {
        self.tick_count += 1;

        let readings = match self.reader.read_all(hw) {
            Ok(r) => r,
            Err(e) => {
                warn!("Cycle {}: sensor read failed ({}), pump forced off", self.tick_count, e);
                return Err(self.fail_safe(e.into(), hw, sink));
            }
        };

        let (sample, decision) = SensorSample::evaluate(readings, &self.policy);
        if decision.at_boundary {
            debug!(
                "Cycle {}: reading on a threshold, decision may flip next cycle",
                self.tick_count
            );
        }

        self.log_sensor_data(&sample, &decision, sink);

        if let Err(e) = self.control_irrigation(sample.irrigation_status(), hw, sink) {
            self.failed_cycles += 1;
            warn!("Cycle {}: pump write failed ({})", self.tick_count, e);
            sink.emit(&AppEvent::CycleFailed(e.into()));
            return Err(e.into());
        }

        Ok(sample)
    }

    /// Emit the cycle record.
    pub fn log_sensor_data(
        &self,
        sample: &SensorSample,
        decision: &Decision,
        sink: &mut impl EventSink,
    ) {
        sink.emit(&AppEvent::Cycle {
            sample: *sample,
            decision: *decision,
        });
    }

    /// Drive the pump line from the decision and emit the matching notice.
    ///
    /// The line is written on every call; there is no edge detection.
    pub fn control_irrigation(
        &self,
        irrigate: bool,
        pump: &mut impl DigitalSink,
        sink: &mut impl EventSink,
    ) -> core::result::Result<(), ActuatorError> {
        pump.set_level(irrigate)?;
        if irrigate {
            sink.emit(&AppEvent::PumpActivated);
        } else {
            sink.emit(&AppEvent::PumpIdle);
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total cycles attempted since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Cycles that ended without actuating on a fresh decision.
    pub fn failed_cycles(&self) -> u64 {
        self.failed_cycles
    }

    pub fn policy(&self) -> &IrrigationPolicy {
        &self.policy
    }

    // ── Internal ──────────────────────────────────────────────

    fn fail_safe(
        &mut self,
        err: crate::error::Error,
        pump: &mut impl DigitalSink,
        sink: &mut impl EventSink,
    ) -> crate::error::Error {
        self.failed_cycles += 1;
        if let Err(e) = pump.set_level(false) {
            log::error!("Cycle {}: fail-safe pump off failed ({})", self.tick_count, e);
        }
        sink.emit(&AppEvent::CycleFailed(err));
        err
    }
}
