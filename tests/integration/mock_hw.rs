//! Mock hardware adapter for integration tests.
//!
//! Serves queued raw ADC values per channel and records every pump line
//! write so tests can assert on the full command history without touching
//! real GPIO registers.

use std::collections::VecDeque;

use irrigator::app::events::AppEvent;
use irrigator::app::ports::{AnalogSource, Channel, DigitalSink, EventSink};
use irrigator::error::{ActuatorError, SensorError};

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Per-channel queue; the last value repeats once the queue drains.
    queues: [VecDeque<u16>; 3],
    last: [u16; 3],
    /// Channels whose next read fails.
    pub failing: Vec<Channel>,
    pub line_broken: bool,
    pub reads: Vec<Channel>,
    pub line_writes: Vec<bool>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            queues: [VecDeque::new(), VecDeque::new(), VecDeque::new()],
            last: [0; 3],
            failing: Vec::new(),
            line_broken: false,
            reads: Vec::new(),
            line_writes: Vec::new(),
        }
    }

    /// Fixed raw readings for every cycle.
    pub fn with_raw(moisture: u16, temp: u16, gas: u16) -> Self {
        let mut hw = Self::new();
        hw.last = [moisture, temp, gas];
        hw
    }

    /// Queue one cycle's raw readings.
    pub fn push_cycle(&mut self, moisture: u16, temp: u16, gas: u16) {
        self.queues[Channel::SoilMoisture.index()].push_back(moisture);
        self.queues[Channel::Temperature.index()].push_back(temp);
        self.queues[Channel::Gas.index()].push_back(gas);
    }

    /// Last level written to the pump line.
    pub fn pump_on(&self) -> Option<bool> {
        self.line_writes.last().copied()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogSource for MockHardware {
    fn read(&mut self, channel: Channel) -> Result<u16, SensorError> {
        self.reads.push(channel);
        if let Some(pos) = self.failing.iter().position(|c| *c == channel) {
            self.failing.remove(pos);
            return Err(SensorError::AdcReadFailed(channel));
        }
        let i = channel.index();
        if let Some(v) = self.queues[i].pop_front() {
            self.last[i] = v;
        }
        Ok(self.last[i])
    }
}

impl DigitalSink for MockHardware {
    fn set_level(&mut self, high: bool) -> Result<(), ActuatorError> {
        if self.line_broken {
            return Err(ActuatorError::GpioWriteFailed);
        }
        self.line_writes.push(high);
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
