//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade (the ESP-IDF logger on target, which goes to UART / USB-CDC).
//! Each event is first rendered to a fixed-capacity string by
//! [`LogEventSink::render`], then logged one line per record. Cycle
//! records are labelled text or JSON depending on [`RecordFormat`].

use core::fmt::{self, Write};

use log::{error, info, warn};

use crate::app::events::{
    AppEvent, BANNER_RULE, BANNER_TITLE, PUMP_ACTIVATED_NOTICE, PUMP_IDLE_NOTICE,
};
use crate::app::ports::EventSink;
use crate::app::record;
use crate::config::RecordFormat;

/// Capacity of one rendered event. Fits a JSON record with extreme readings.
pub const RENDERED_CAPACITY: usize = 256;

pub type RenderedEvent = heapless::String<RENDERED_CAPACITY>;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink {
    format: RecordFormat,
}

impl LogEventSink {
    pub fn new(format: RecordFormat) -> Self {
        Self { format }
    }

    /// Render `event` exactly as it will appear on the console, one line
    /// per log record.
    pub fn render(&self, event: &AppEvent) -> Result<RenderedEvent, fmt::Error> {
        let mut out = RenderedEvent::new();
        match event {
            AppEvent::Started => {
                writeln!(out, "{}", BANNER_TITLE)?;
                write!(out, "{}", BANNER_RULE)?;
            }
            AppEvent::Cycle { sample, decision } => match self.format {
                RecordFormat::Text => write!(out, "{}", record::render_text(sample)?)?,
                RecordFormat::Json => {
                    let json = record::render_json(sample, decision).map_err(|e| {
                        error!("RECORD | json encode failed: {}", e);
                        fmt::Error
                    })?;
                    write!(out, "{}", json)?;
                }
            },
            AppEvent::PumpActivated => write!(out, "{}", PUMP_ACTIVATED_NOTICE)?,
            AppEvent::PumpIdle => write!(out, "{}", PUMP_IDLE_NOTICE)?,
            AppEvent::CycleFailed(e) => write!(out, "CYCLE | failed: {}", e)?,
        }
        Ok(out)
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new(RecordFormat::Text)
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        let text = match self.render(event) {
            Ok(text) => text,
            Err(_) => {
                error!("EVENT | render overflow: {:?}", event);
                return;
            }
        };
        let failed = matches!(event, AppEvent::CycleFailed(_));
        for line in text.lines() {
            if failed {
                warn!("{}", line);
            } else {
                info!("{}", line);
            }
        }
    }
}
