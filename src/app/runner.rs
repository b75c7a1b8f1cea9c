//! Bridges the [`CycleScheduler`](crate::scheduler::CycleScheduler) to the
//! [`AppService`].
//!
//! The scheduler only knows that a cycle is due; this delegate owns the
//! borrowed service, hardware, and sink and runs the cycle. Errors are
//! already reported through the sink by the service, so the runner keeps
//! the last outcome for inspection and carries on.

use log::trace;

use crate::error::Result;

use super::ports::{AnalogSource, DigitalSink, EventSink, SchedulerDelegate};
use super::sample::SensorSample;
use super::service::AppService;

pub struct CycleRunner<'a, H, S> {
    app: &'a mut AppService,
    hw: &'a mut H,
    sink: &'a mut S,
    last: Option<Result<SensorSample>>,
}

impl<'a, H, S> CycleRunner<'a, H, S>
where
    H: AnalogSource + DigitalSink,
    S: EventSink,
{
    pub fn new(app: &'a mut AppService, hw: &'a mut H, sink: &'a mut S) -> Self {
        Self {
            app,
            hw,
            sink,
            last: None,
        }
    }

    /// Outcome of the most recent cycle, if any has run.
    pub fn last_outcome(&self) -> Option<&Result<SensorSample>> {
        self.last.as_ref()
    }

    pub fn app(&self) -> &AppService {
        &*self.app
    }
}

impl<H, S> SchedulerDelegate for CycleRunner<'_, H, S>
where
    H: AnalogSource + DigitalSink,
    S: EventSink,
{
    fn on_cycle_due(&mut self, cycle: u64) {
        trace!("cycle {} due", cycle);
        self.last = Some(self.app.tick(&mut *self.hw, &mut *self.sink));
    }
}
