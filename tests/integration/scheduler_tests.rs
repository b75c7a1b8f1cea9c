//! Scheduler → runner → service, driven by a fake clock.

use irrigator::app::events::AppEvent;
use irrigator::app::runner::CycleRunner;
use irrigator::app::service::AppService;
use irrigator::config::ControllerConfig;
use irrigator::scheduler::CycleScheduler;

use crate::mock_hw::{MockHardware, RecordingSink};

#[test]
fn one_cycle_per_sampling_interval() {
    let config = ControllerConfig::default();
    let mut sched = CycleScheduler::from_config(&config).unwrap();
    let mut app = AppService::new(config).unwrap();
    let mut hw = MockHardware::with_raw(250, 153, 100);
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink).unwrap();

    {
        let mut runner = CycleRunner::new(&mut app, &mut hw, &mut sink);
        // One minute of 250 ms ticks.
        for now in (0..60_000u64).step_by(250) {
            sched.tick(now, &mut runner);
        }
        assert!(matches!(runner.last_outcome(), Some(Ok(_))));
    }

    assert_eq!(sched.cycles(), 12);
    assert_eq!(app.tick_count(), 12);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::Cycle { .. })), 12);
}

#[test]
fn failed_cycle_does_not_stop_the_loop() {
    let config = ControllerConfig {
        sampling_interval_ms: 1000,
        ..ControllerConfig::default()
    };
    let mut sched = CycleScheduler::from_config(&config).unwrap();
    let mut app = AppService::new(config).unwrap();
    let mut hw = MockHardware::with_raw(800, 153, 100);
    hw.failing.push(irrigator::app::ports::Channel::SoilMoisture);
    let mut sink = RecordingSink::new();

    {
        let mut runner = CycleRunner::new(&mut app, &mut hw, &mut sink);
        assert!(sched.tick(0, &mut runner));
        assert!(matches!(runner.last_outcome(), Some(Err(_))));
        assert!(sched.tick(1000, &mut runner));
        assert!(matches!(runner.last_outcome(), Some(Ok(s)) if !s.irrigation_status()));
    }

    assert_eq!(app.tick_count(), 2);
    assert_eq!(app.failed_cycles(), 1);
    assert_eq!(hw.line_writes, vec![false, false]);
}
