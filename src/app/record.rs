//! Cycle record rendering.
//!
//! The text record is built in a fixed-capacity [`heapless::String`] so the
//! per-cycle path does not allocate. The JSON variant is for log shippers
//! that expect one object per line.

use core::fmt::Write;

use serde::Serialize;

use crate::policy::{Decision, DecisionReason};

use super::sample::SensorSample;

/// Header line of every text record.
pub const RECORD_HEADER: &str = "--- Sensor Data Log ---";

/// Text record capacity. Covers five labelled lines with worst-case widths.
pub const RECORD_CAPACITY: usize = 192;

pub type TextRecord = heapless::String<RECORD_CAPACITY>;

/// `REQUIRED` / `NOT NEEDED`.
pub fn status_label(irrigate: bool) -> &'static str {
    if irrigate { "REQUIRED" } else { "NOT NEEDED" }
}

/// Render the multi-line labelled record for `sample`.
///
/// Fails only if the formatted record exceeds [`RECORD_CAPACITY`].
pub fn render_text(sample: &SensorSample) -> Result<TextRecord, core::fmt::Error> {
    let mut out = TextRecord::new();
    writeln!(out, "{}", RECORD_HEADER)?;
    writeln!(out, "Soil Moisture: {}", sample.soil_moisture())?;
    writeln!(out, "Temperature: {:.2}\u{00b0}C", sample.temperature_c())?;
    writeln!(out, "Gas Reading: {}", sample.gas_reading())?;
    write!(
        out,
        "Irrigation Status: {}",
        status_label(sample.irrigation_status())
    )?;
    Ok(out)
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    sample: &'a SensorSample,
    reason: DecisionReason,
    at_boundary: bool,
}

/// Render `sample` and its decision as a single JSON object.
pub fn render_json(sample: &SensorSample, decision: &Decision) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JsonRecord {
        sample,
        reason: decision.reason,
        at_boundary: decision.at_boundary,
    })
}
