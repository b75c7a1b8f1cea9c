//! Application core — pure domain logic, zero I/O.
//!
//! The irrigation cycle, the per-cycle sample, and record rendering.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod record;
pub mod runner;
pub mod sample;
pub mod service;
