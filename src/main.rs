//! Irrigation Controller Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter          LogEventSink       MonotonicClock    │
//! │  (AnalogSource+DigitalSink) (EventSink)      (time source)     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  SensorReader · IrrigationPolicy                       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  CycleScheduler ──▶ CycleRunner (delegate)                     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::FreeRtos;
use log::{info, warn};

use irrigator::adapters::hardware::HardwareAdapter;
use irrigator::adapters::log_sink::LogEventSink;
use irrigator::adapters::time::MonotonicClock;
use irrigator::app::runner::CycleRunner;
use irrigator::app::service::AppService;
use irrigator::config::ControllerConfig;
use irrigator::drivers::hw_init;
use irrigator::drivers::pump::PumpDriver;
use irrigator::scheduler::CycleScheduler;

/// Upper bound on one sleep so the idle task and watchdog get regular turns.
const MAX_SLEEP_MS: u32 = 1000;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Irrigator v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().context("peripheral init")?;

    // ── 3. Configuration (compile-time defaults, never persisted) ──
    let config = ControllerConfig::default();

    // ── 4. Adapters + service ─────────────────────────────────
    let mut hw = HardwareAdapter::new(PumpDriver::new());
    let mut log_sink = LogEventSink::new(config.record_format);
    let clock = MonotonicClock::new();
    let mut sched = CycleScheduler::from_config(&config)?;

    let mut app = AppService::new(config)?;
    app.start(&mut hw, &mut log_sink)?;

    info!("System ready. Entering cycle loop.");

    // ── 5. Cycle loop (never returns) ─────────────────────────
    let mut runner = CycleRunner::new(&mut app, &mut hw, &mut log_sink);
    loop {
        let now = clock.uptime_ms();
        if sched.tick(now, &mut runner) {
            if let Some(Err(e)) = runner.last_outcome() {
                warn!(
                    "Cycle {} failed: {} ({} failed so far)",
                    sched.cycles(),
                    e,
                    runner.app().failed_cycles()
                );
            }
        }
        let sleep_ms = sched.ms_until_due(clock.uptime_ms()).clamp(1, MAX_SLEEP_MS);
        FreeRtos::delay_ms(sleep_ms);
    }
}
