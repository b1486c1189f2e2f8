//! Constants for the Firesentry Core
//!
//! Centralized, documented numeric values used throughout the risk
//! pipeline. All tunables live here with their purpose and provenance so
//! no magic numbers appear at call sites.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document units and rationale
//! 3. Values marked "firmware default" match the reference deployment
//!    (MQ-2 gas sensor + IR flame sensor on ESP32)

/// Milliseconds per second, for rate conversions
pub const MS_PER_SECOND: u32 = 1000;

/// Default tick interval in milliseconds (firmware default)
///
/// One tick runs the full read-statistics-fuse-classify cycle. Actuator
/// cadence polling runs faster, downstream of the classified state.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 500;

/// Default baseline window size in samples (firmware default)
///
/// 600 samples at a 100 ms gas sampling cadence is one minute of
/// history, matching the reference firmware's one-minute learning phase.
pub const DEFAULT_WINDOW_SIZE: usize = 600;

/// Floor applied to the standard deviation before z-score division
///
/// A near-constant signal has a std dev close to 0; dividing by it would
/// blow the z-score up to infinity on the first speck of noise. Flooring
/// at 0.1 keeps the score finite while staying well below real sensor
/// noise levels.
pub const STD_DEV_FLOOR: f32 = 0.1;

/// Z-score regarded as a statistically significant deviation
///
/// Informational: the classifier consumes absolute risk-score thresholds,
/// not z-scores. Kept for dashboards and diagnostics.
pub const Z_SCORE_WARNING: f32 = 3.0;

/// Z-score regarded as a very high deviation (informational, see above)
pub const Z_SCORE_HIGH_RISK: f32 = 6.0;

/// Z-score where the z-component leaves the noise band (maps to 10)
pub const Z_NOISE_CEILING: f32 = 2.0;

/// Z-score where the z-component reaches 80
pub const Z_ALARM_CEILING: f32 = 6.0;

/// Z-component value at the top of the noise band
pub const Z_COMPONENT_AT_NOISE_CEILING: f32 = 10.0;

/// Z-component value at the alarm ceiling
pub const Z_COMPONENT_AT_ALARM_CEILING: f32 = 80.0;

/// Gas reading considered unambiguously safe (absolute-component = 0)
pub const GAS_SAFE_THRESHOLD: f32 = 800.0;

/// Gas reading considered unambiguously dangerous (absolute-component = 100)
pub const GAS_DANGER_THRESHOLD: f32 = 2500.0;

/// Rate-of-change (units/second) mapped to a trend-component of 100
pub const TREND_DANGER_RATE: f32 = 50.0;

/// Consecutive flame ticks required for the confirmed-fire short circuit
///
/// IR flame sensors glitch on sunlight and hot surfaces; requiring
/// sustained assertion filters single-tick spikes. At the default 500 ms
/// tick this is 1.5 s of continuous flame.
pub const FLAME_PERSIST_THRESHOLD: u32 = 3;

/// Default fusion weight for the z-score component
pub const WEIGHT_Z: f32 = 0.40;

/// Default fusion weight for the trend component
pub const WEIGHT_TREND: f32 = 0.25;

/// Default fusion weight for the absolute-reading component
pub const WEIGHT_ABSOLUTE: f32 = 0.20;

/// Default fusion weight for the flame-persistence component
pub const WEIGHT_FLAME: f32 = 0.15;

/// Ceiling for the fused score when the short circuit has not fired
///
/// 100 is reserved exclusively for confirmed fire, so "fusion says max"
/// and "flame sensor confirmed" are never ambiguous.
pub const FUSED_SCORE_CEILING: f32 = 99.0;

/// Maximum risk score, produced only by the confirmed-fire short circuit
pub const RISK_SCORE_MAX: f32 = 100.0;
