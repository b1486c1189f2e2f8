//! Per-Tick Risk Pipeline and Driver
//!
//! ## Overview
//!
//! One logical tick runs the full sequence to completion before the next
//! begins:
//!
//! ```text
//! SensorFrame → RollingStatistics.add_sample
//!             → z-score / rate-of-change (once baseline ready)
//!             → RiskFusion.compute
//!             → classify
//!             → AlertSink + TelemetrySink
//! ```
//!
//! No operation suspends or blocks and the only O(N) work is the
//! statistics scan, so each tick completes in bounded, deterministic
//! time. The core is single-writer single-reader per tick; no locking is
//! needed. Anything asynchronous (actuator cadence, network serving)
//! sits strictly downstream of the classified state.
//!
//! ## Two Layers
//!
//! - [`RiskPipeline`] is the pure core step: frame in, record out. It
//!   owns the long-lived state (rolling window, flame counter) as
//!   explicit fields - no ambient globals.
//! - [`PipelineDriver`] wires the core to the collaborator seams and
//!   adds the error surface (sensor unavailable, telemetry rejected).

use crate::config::RiskConfig;
use crate::flame::FlamePersistence;
use crate::fusion::RiskFusion;
use crate::errors::PipelineError;
use crate::state::{classify, AlertState};
use crate::stats::RollingStatistics;
use crate::time::Timestamp;
use crate::traits::{AlertSink, SensorFrame, SensorSource, TelemetrySink};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{}};
}

/// Flat per-tick output record
///
/// Field presence and order are not contractual; only the semantic
/// content is. Serialization (behind the `serde` feature) is provided
/// for telemetry sinks that forward records off-device.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRecord {
    /// Tick timestamp in milliseconds
    pub timestamp: Timestamp,
    /// Smoothed gas reading consumed this tick
    pub gas: f32,
    /// Z-score of the reading against the baseline (0.0 before ready)
    pub z_score: f32,
    /// Gas rise rate in units/second (0.0 before ready)
    pub rate_of_change: f32,
    /// Fused risk score in [0, 100]
    pub risk_score: f32,
    /// Flame sensor state this tick
    pub flame: bool,
    /// Consecutive flame ticks including this one
    pub flame_persistence: u32,
    /// Classified alert state
    pub state: AlertState,
}

impl Default for TickRecord {
    fn default() -> Self {
        Self {
            timestamp: 0,
            gas: 0.0,
            z_score: 0.0,
            rate_of_change: 0.0,
            risk_score: 0.0,
            flame: false,
            flame_persistence: 0,
            state: AlertState::Bootup,
        }
    }
}

/// The adaptive risk-scoring core
///
/// Owns the rolling gas window and the flame persistence counter for the
/// lifetime of the process; everything else is recomputed fresh each
/// tick. `N` is the baseline window size in samples.
#[derive(Debug, Clone)]
pub struct RiskPipeline<const N: usize> {
    stats: RollingStatistics<N>,
    flame: FlamePersistence,
    fusion: RiskFusion,
}

impl<const N: usize> RiskPipeline<N> {
    /// Creates a pipeline with an empty baseline
    pub const fn new(config: RiskConfig) -> Self {
        Self {
            stats: RollingStatistics::new(config.tick_interval_ms),
            flame: FlamePersistence::new(),
            fusion: RiskFusion::new(config),
        }
    }

    /// Runs one tick: reading → statistics → fusion → classification
    ///
    /// Before the baseline is ready, the z-score and rate-of-change are
    /// reported as 0.0 and the state is [`AlertState::Bootup`] - the
    /// learning-phase mean is diagnostic only and feeds no decision.
    pub fn tick(&mut self, frame: SensorFrame, timestamp: Timestamp) -> TickRecord {
        self.stats.add_sample(frame.gas);
        let flame_persistence = self.flame.observe(frame.flame);

        let baseline_ready = self.stats.is_baseline_ready();
        let (z_score, rate_of_change) = if baseline_ready {
            (self.stats.z_score(frame.gas), self.stats.rate_of_change())
        } else {
            log_debug!(
                "learning baseline: {}/{} samples, mean {}",
                self.stats.sample_count(),
                N,
                self.stats.mean()
            );
            (0.0, 0.0)
        };

        let risk_score = self.fusion.compute(
            z_score,
            rate_of_change,
            frame.gas,
            flame_persistence,
            frame.flame,
        );
        let state = classify(risk_score, baseline_ready);

        TickRecord {
            timestamp,
            gas: frame.gas,
            z_score,
            rate_of_change,
            risk_score,
            flame: frame.flame,
            flame_persistence,
            state,
        }
    }

    /// True once the baseline window has filled (one-way latch)
    pub fn is_baseline_ready(&self) -> bool {
        self.stats.is_baseline_ready()
    }

    /// Learning-phase mean, for diagnostics and dashboards only
    pub fn learning_mean(&self) -> f32 {
        self.stats.mean()
    }
}

/// Orchestrates the core against its external collaborators
///
/// Polls the sensor source, runs the core tick, then fans the result out
/// to the alert and telemetry sinks. The driver owns all long-lived
/// state explicitly; there are no hidden globals.
pub struct PipelineDriver<S, A, T, const N: usize> {
    source: S,
    alert_sink: A,
    telemetry: T,
    pipeline: RiskPipeline<N>,
}

impl<S, A, T, const N: usize> PipelineDriver<S, A, T, N>
where
    S: SensorSource,
    A: AlertSink,
    T: TelemetrySink,
{
    /// Wires a pipeline to its collaborators
    pub fn new(source: S, alert_sink: A, telemetry: T, config: RiskConfig) -> Self {
        Self {
            source,
            alert_sink,
            telemetry,
            pipeline: RiskPipeline::new(config),
        }
    }

    /// Runs one tick at the given timestamp
    ///
    /// A `WouldBlock` poll surfaces as [`PipelineError::SensorNotReady`]
    /// and leaves the core untouched - the tick simply did not happen.
    /// A telemetry failure is reported *after* the alert sink has been
    /// updated: losing a record must never delay an alarm.
    pub fn run_tick(&mut self, now: Timestamp) -> Result<TickRecord, PipelineError> {
        let frame = self.source.poll_frame().map_err(|e| match e {
            nb::Error::WouldBlock => PipelineError::SensorNotReady,
            nb::Error::Other(e) => PipelineError::Sensor(e),
        })?;

        let record = self.pipeline.tick(frame, now);
        self.alert_sink.set_state(record.state);

        self.telemetry.publish(&record)?;
        Ok(record)
    }

    /// The underlying core pipeline
    pub fn pipeline(&self) -> &RiskPipeline<N> {
        &self.pipeline
    }

    /// The alert sink, for reading back the latest state
    pub fn alert_sink(&self) -> &A {
        &self.alert_sink
    }

    /// The telemetry sink, for draining captured records
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }
}
