//! Cycle scheduler.
//!
//! Replaces a blocking `delay()` loop with an explicit tick. Whoever owns
//! time (the firmware main loop, or a test harness with a fake clock) calls
//! [`CycleScheduler::tick`] with the current monotonic time; when a cycle is
//! due the scheduler notifies its [`SchedulerDelegate`].
//!
//! ```text
//!  MonotonicClock ──now_ms──▶ CycleScheduler ──on_cycle_due──▶ CycleRunner
//!                                                               (AppService.tick)
//! ```
//!
//! The first tick always fires. After that a cycle fires every
//! `interval_ms`. If the caller falls behind by several intervals the
//! missed cycles collapse into one firing; there is no burst catch-up.
//! Every due tick runs a cycle.

use core::num::NonZeroU32;

use crate::app::ports::SchedulerDelegate;
use crate::config::{ConfigError, ControllerConfig};
use log::warn;

pub struct CycleScheduler {
    interval_ms: NonZeroU32,
    /// `None` until the first tick.
    next_due_ms: Option<u64>,
    cycles: u64,
    skipped: u64,
}

impl CycleScheduler {
    pub fn new(interval_ms: NonZeroU32) -> Self {
        Self {
            interval_ms,
            next_due_ms: None,
            cycles: 0,
            skipped: 0,
        }
    }

    /// A zero sampling interval is rejected, not rounded up.
    pub fn from_config(config: &ControllerConfig) -> Result<Self, ConfigError> {
        NonZeroU32::new(config.sampling_interval_ms)
            .map(Self::new)
            .ok_or(ConfigError::ValidationFailed("sampling_interval_ms must be non-zero"))
    }

    /// Advance to `now_ms`. Returns `true` if a cycle fired.
    pub fn tick(&mut self, now_ms: u64, delegate: &mut dyn SchedulerDelegate) -> bool {
        let interval = u64::from(self.interval_ms.get());
        let due = *self.next_due_ms.get_or_insert(now_ms);
        if now_ms < due {
            return false;
        }

        let mut next = due + interval;
        if next <= now_ms {
            let missed = (now_ms - due) / interval;
            self.skipped += missed;
            warn!("Scheduler: {} cycle(s) overrun, resyncing", missed);
            next = now_ms + interval;
        }
        self.next_due_ms = Some(next);

        self.cycles += 1;
        delegate.on_cycle_due(self.cycles);
        true
    }

    /// Milliseconds the caller may sleep before the next cycle is due.
    pub fn ms_until_due(&self, now_ms: u64) -> u32 {
        match self.next_due_ms {
            Some(due) => due.saturating_sub(now_ms).min(u64::from(self.interval_ms.get())) as u32,
            None => 0,
        }
    }

    /// Cycles fired so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Intervals dropped because the caller ticked too late.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
