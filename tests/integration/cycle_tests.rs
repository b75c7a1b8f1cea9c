//! Integration tests for the sensor → policy → log → pump pipeline.

use irrigator::app::events::AppEvent;
use irrigator::app::ports::Channel;
use irrigator::app::record;
use irrigator::app::service::AppService;
use irrigator::config::ControllerConfig;
use irrigator::error::{ActuatorError, Error, SensorError};
use irrigator::policy::DecisionReason;

use crate::mock_hw::{MockHardware, RecordingSink};

// Raw temperature counts at the default 5 V / 1023 calibration.
const RAW_25C: u16 = 153; // 24.8 °C
const RAW_35C: u16 = 174; // 35.0 °C

fn started(hw: &mut MockHardware) -> (AppService, RecordingSink) {
    let mut app = AppService::new(ControllerConfig::default()).unwrap();
    let mut sink = RecordingSink::new();
    app.start(hw, &mut sink).unwrap();
    (app, sink)
}

#[test]
fn startup_banner_then_cycle_then_notice() {
    let mut hw = MockHardware::with_raw(250, RAW_25C, 100);
    let (mut app, mut sink) = started(&mut hw);

    app.tick(&mut hw, &mut sink).unwrap();

    assert_eq!(sink.events[0], AppEvent::Started);
    assert!(matches!(sink.events[1], AppEvent::Cycle { .. }));
    assert_eq!(sink.events[2], AppEvent::PumpActivated);
    assert_eq!(sink.events.len(), 3);
    // Startup forces LOW, then the cycle drives HIGH.
    assert_eq!(hw.line_writes, vec![false, true]);
}

#[test]
fn banner_is_emitted_once() {
    let mut hw = MockHardware::with_raw(500, RAW_25C, 100);
    let (mut app, mut sink) = started(&mut hw);
    for _ in 0..5 {
        app.tick(&mut hw, &mut sink).unwrap();
    }
    assert_eq!(sink.count(|e| *e == AppEvent::Started), 1);
    assert_eq!(app.tick_count(), 5);
}

#[test]
fn decision_follows_each_cycles_readings() {
    let mut hw = MockHardware::new();
    hw.push_cycle(250, RAW_25C, 100); // dry
    hw.push_cycle(500, RAW_35C, 500); // heat + gas
    hw.push_cycle(500, RAW_35C, 100); // heat only
    let (mut app, mut sink) = started(&mut hw);

    let a = app.tick(&mut hw, &mut sink).unwrap();
    let b = app.tick(&mut hw, &mut sink).unwrap();
    let c = app.tick(&mut hw, &mut sink).unwrap();

    assert!(a.irrigation_status());
    assert!(b.irrigation_status());
    assert!(!c.irrigation_status());
    assert_eq!(hw.line_writes, vec![false, true, true, false]);

    let reasons: Vec<DecisionReason> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Cycle { decision, .. } => Some(decision.reason),
            _ => None,
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            DecisionReason::LowMoisture,
            DecisionReason::HeatAndGasStress,
            DecisionReason::NotRequired,
        ]
    );
}

#[test]
fn logged_sample_matches_actuation() {
    let mut hw = MockHardware::new();
    hw.push_cycle(250, RAW_25C, 100);
    hw.push_cycle(800, RAW_25C, 100);
    let (mut app, mut sink) = started(&mut hw);
    app.tick(&mut hw, &mut sink).unwrap();
    app.tick(&mut hw, &mut sink).unwrap();

    // Each Cycle event is immediately followed by the notice for its own decision.
    for pair in sink.events[1..].chunks(2) {
        match pair {
            [AppEvent::Cycle { sample, .. }, notice] => {
                let expected = if sample.irrigation_status() {
                    AppEvent::PumpActivated
                } else {
                    AppEvent::PumpIdle
                };
                assert_eq!(*notice, expected);
            }
            other => panic!("unexpected event pair {:?}", other),
        }
    }
}

#[test]
fn same_decision_rewrites_line_every_cycle() {
    let mut hw = MockHardware::with_raw(250, RAW_25C, 100);
    let (mut app, mut sink) = started(&mut hw);
    for _ in 0..3 {
        app.tick(&mut hw, &mut sink).unwrap();
    }
    assert_eq!(hw.line_writes, vec![false, true, true, true]);
    assert_eq!(sink.count(|e| *e == AppEvent::PumpActivated), 3);
}

#[test]
fn read_failure_fails_safe_and_recovers() {
    let mut hw = MockHardware::with_raw(250, RAW_25C, 100);
    let (mut app, mut sink) = started(&mut hw);

    app.tick(&mut hw, &mut sink).unwrap();
    assert_eq!(hw.pump_on(), Some(true));

    hw.failing.push(Channel::Gas);
    let err = app.tick(&mut hw, &mut sink).unwrap_err();
    assert_eq!(err, Error::Sensor(SensorError::AdcReadFailed(Channel::Gas)));
    assert_eq!(hw.pump_on(), Some(false), "pump must be forced off");
    assert_eq!(sink.events.last(), Some(&AppEvent::CycleFailed(err)));
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::Cycle { .. })),
        1,
        "failed cycle must not log a sample"
    );

    // Next cycle starts fresh.
    app.tick(&mut hw, &mut sink).unwrap();
    assert_eq!(hw.pump_on(), Some(true));
    assert_eq!(app.failed_cycles(), 1);
    assert_eq!(app.tick_count(), 3);
}

#[test]
fn out_of_range_reading_is_a_failed_cycle() {
    let mut hw = MockHardware::with_raw(4095, RAW_25C, 100);
    let (mut app, mut sink) = started(&mut hw);
    let err = app.tick(&mut hw, &mut sink).unwrap_err();
    assert_eq!(
        err,
        Error::Sensor(SensorError::OutOfRange(Channel::SoilMoisture))
    );
}

#[test]
fn pump_write_failure_is_reported() {
    let mut hw = MockHardware::with_raw(250, RAW_25C, 100);
    let (mut app, mut sink) = started(&mut hw);
    hw.line_broken = true;

    let err = app.tick(&mut hw, &mut sink).unwrap_err();
    assert_eq!(err, Error::Actuator(ActuatorError::GpioWriteFailed));
    // The record is still logged before actuation is attempted.
    assert!(matches!(sink.events[1], AppEvent::Cycle { .. }));
    assert_eq!(sink.events.last(), Some(&AppEvent::CycleFailed(err)));
    assert_eq!(app.failed_cycles(), 1);
}

#[test]
fn cycle_record_text_is_rendered_from_event() {
    let mut hw = MockHardware::with_raw(500, RAW_35C, 100);
    let (mut app, mut sink) = started(&mut hw);
    app.tick(&mut hw, &mut sink).unwrap();

    let AppEvent::Cycle { sample, .. } = sink.events[1] else {
        panic!("expected a cycle record");
    };
    let text = record::render_text(&sample).unwrap();
    assert!(text.contains("Soil Moisture: 500"));
    assert!(text.contains("Gas Reading: 100"));
    assert!(text.contains("Irrigation Status: NOT NEEDED"));
}
