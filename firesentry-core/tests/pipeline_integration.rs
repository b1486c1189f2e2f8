//! End-to-end tests for the risk pipeline
//!
//! Exercises the full tick sequence - reading, statistics, fusion,
//! classification, sink fan-out - against the scenarios the core is
//! specified to handle: baseline learning, a calm steady state, a sudden
//! gas excursion, and a confirmed fire.

use firesentry_core::{
    classify, AlertState, FusionWeights, PipelineDriver, RiskConfig, RiskPipeline, SensorFrame,
};
use firesentry_core::errors::SensorError;
use firesentry_core::time::{FixedTime, TimeSource};
use firesentry_core::traits::{LatestStateSink, MemoryTelemetrySink, SensorSource};

/// Sensor source that replays a fixed list of frames
struct ReplaySource {
    frames: std::vec::IntoIter<SensorFrame>,
}

impl ReplaySource {
    fn new(frames: Vec<SensorFrame>) -> Self {
        Self { frames: frames.into_iter() }
    }
}

impl SensorSource for ReplaySource {
    fn poll_frame(&mut self) -> nb::Result<SensorFrame, SensorError> {
        self.frames.next().ok_or(nb::Error::WouldBlock)
    }
}

fn gas(value: f32) -> SensorFrame {
    SensorFrame { gas: value, flame: false }
}

fn config_1s_tick() -> RiskConfig {
    RiskConfig {
        tick_interval_ms: 1000,
        ..RiskConfig::default()
    }
}

#[test]
fn baseline_latch_over_window_boundary() {
    let mut pipeline: RiskPipeline<5> = RiskPipeline::new(config_1s_tick());

    // First windowSize - 1 samples: still learning
    for t in 0..4u64 {
        let record = pipeline.tick(gas(10.0), t * 1000);
        assert_eq!(record.state, AlertState::Bootup);
        assert!(!pipeline.is_baseline_ready());
    }

    // The windowSize-th sample latches readiness, forever
    let record = pipeline.tick(gas(10.0), 4000);
    assert_ne!(record.state, AlertState::Bootup);
    assert!(pipeline.is_baseline_ready());

    let record = pipeline.tick(gas(1e9), 5000);
    assert!(pipeline.is_baseline_ready());
    assert_ne!(record.state, AlertState::Bootup);
}

#[test]
fn calm_baseline_then_excursion() {
    // Window 5, tick 1 s: samples [10; 5] learn a flat baseline
    let mut pipeline: RiskPipeline<5> = RiskPipeline::new(config_1s_tick());
    for t in 0..5u64 {
        pipeline.tick(gas(10.0), t * 1000);
    }

    // Next 10: std dev floored, numerator 0, so z = 0 and risk ~ 0
    let calm = pipeline.tick(gas(10.0), 5000);
    assert_eq!(calm.z_score, 0.0);
    assert_eq!(calm.rate_of_change, 0.0);
    assert_eq!(calm.risk_score, 0.0);
    assert_eq!(calm.state, AlertState::Safe);

    // A jump to 200 drives z positive and the trend upward
    let spike = pipeline.tick(gas(200.0), 6000);
    assert!(spike.z_score > 0.0);
    // (200 - 10) over a 5-sample x 1 s window = 38 units/s
    assert!((spike.rate_of_change - 38.0).abs() < 1e-3);
    assert!(spike.risk_score > calm.risk_score);
}

#[test]
fn saturated_absolute_channel_reaches_high_risk() {
    // Shift all weight onto the absolute channel so a reading past the
    // danger threshold pins the fused score at the 99 ceiling
    let config = RiskConfig {
        tick_interval_ms: 1000,
        weights: FusionWeights { z: 0.0, trend: 0.0, absolute: 1.0, flame: 0.0 },
        gas_safe_threshold: 50.0,
        gas_danger_threshold: 150.0,
        ..RiskConfig::default()
    };
    let mut pipeline: RiskPipeline<5> = RiskPipeline::new(config);
    for t in 0..5u64 {
        pipeline.tick(gas(10.0), t * 1000);
    }

    let record = pipeline.tick(gas(200.0), 5000);
    assert_eq!(record.risk_score, 99.0);
    assert_eq!(record.state, AlertState::HighRisk);
}

#[test]
fn sustained_flame_confirms_emergency() {
    let config = config_1s_tick();
    let threshold = config.flame_persist_threshold;
    let mut pipeline: RiskPipeline<5> = RiskPipeline::new(config);
    for t in 0..5u64 {
        pipeline.tick(gas(10.0), t * 1000);
    }

    // Flame asserted but not yet persistent: partial credit only
    let mut record = pipeline.tick(SensorFrame { gas: 10.0, flame: true }, 5000);
    for i in 1..threshold as u64 {
        assert!(record.risk_score < 100.0);
        assert_ne!(record.state, AlertState::Emergency);
        record = pipeline.tick(SensorFrame { gas: 10.0, flame: true }, 5000 + i * 1000);
    }

    // Threshold-th consecutive tick: exactly 100, Emergency
    assert_eq!(record.risk_score, 100.0);
    assert_eq!(record.state, AlertState::Emergency);
    assert_eq!(record.flame_persistence, threshold);

    // One clear tick resets persistence and drops out of Emergency
    let record = pipeline.tick(gas(10.0), 20_000);
    assert_eq!(record.flame_persistence, 0);
    assert_ne!(record.state, AlertState::Emergency);
}

#[test]
fn classifier_boundary_table() {
    assert_eq!(classify(39.9, true), AlertState::Safe);
    assert_eq!(classify(40.0, true), AlertState::Warning);
    assert_eq!(classify(79.9, true), AlertState::Warning);
    assert_eq!(classify(80.0, true), AlertState::HighRisk);
    assert_eq!(classify(100.0, true), AlertState::Emergency);
    assert_eq!(classify(0.0, false), AlertState::Bootup);
    assert_eq!(classify(100.0, false), AlertState::Bootup);
}

#[test]
fn driver_end_to_end_telemetry() {
    let mut frames: Vec<SensorFrame> = (0..6).map(|_| gas(400.0)).collect();
    frames.push(SensorFrame { gas: 420.0, flame: true });

    let mut driver: PipelineDriver<_, _, _, 5> = PipelineDriver::new(
        ReplaySource::new(frames),
        LatestStateSink::new(),
        MemoryTelemetrySink::<16>::new(),
        RiskConfig::default(),
    );

    // Hand-cranked clock standing in for the device timer
    let mut clock = FixedTime::new(0);
    for _ in 0..7 {
        driver.run_tick(clock.now()).unwrap();
        clock.advance(500);
    }

    let records = driver.telemetry().records();
    assert_eq!(records.len(), 7);

    // Learning phase, then calm, then one flame tick with partial credit
    assert_eq!(records[0].state, AlertState::Bootup);
    assert_eq!(records[3].state, AlertState::Bootup);
    assert_eq!(records[5].state, AlertState::Safe);
    assert_eq!(records[6].flame_persistence, 1);
    assert!(records[6].risk_score > records[5].risk_score);
    assert_eq!(records[0].state.name(), "BOOTUP");

    // Record timestamps follow the tick clock
    assert_eq!(records[6].timestamp, 3000);
}
