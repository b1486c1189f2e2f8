//! Configuration Surface for the Risk Pipeline
//!
//! Groups the tunables from [`crate::constants`] into plain-old-data
//! structs that are cheap to copy into the pipeline at construction.
//! Nothing here is read from disk or network - on an edge device the
//! configuration is compiled in or injected by the bootstrap glue.

use crate::constants::{
    DEFAULT_TICK_INTERVAL_MS, FLAME_PERSIST_THRESHOLD, GAS_DANGER_THRESHOLD,
    GAS_SAFE_THRESHOLD, TREND_DANGER_RATE, WEIGHT_ABSOLUTE, WEIGHT_FLAME, WEIGHT_TREND,
    WEIGHT_Z, Z_SCORE_HIGH_RISK, Z_SCORE_WARNING,
};

/// Convex weights for the four fusion components
///
/// Must sum to 1.0. This is not validated at runtime: a bad weight set
/// is a silent correctness bug, not a detected error - the fused score
/// stays bounded either way because every component clamps to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FusionWeights {
    /// Weight of the z-score component
    pub z: f32,
    /// Weight of the rate-of-change (trend) component
    pub trend: f32,
    /// Weight of the absolute-reading component
    pub absolute: f32,
    /// Weight of the flame-persistence component
    pub flame: f32,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            z: WEIGHT_Z,
            trend: WEIGHT_TREND,
            absolute: WEIGHT_ABSOLUTE,
            flame: WEIGHT_FLAME,
        }
    }
}

/// Full configuration for one risk pipeline instance
///
/// The window size is deliberately absent: it is the const generic on
/// [`crate::RollingStatistics`] / [`crate::RiskPipeline`], fixed at
/// compile time so the window can be pre-allocated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskConfig {
    /// Milliseconds between ticks; converts rate-of-change to per-second
    pub tick_interval_ms: u32,

    /// Fusion component weights (must sum to 1.0)
    pub weights: FusionWeights,

    /// Gas reading below which the absolute component is 0
    pub gas_safe_threshold: f32,

    /// Gas reading above which the absolute component is 100
    pub gas_danger_threshold: f32,

    /// Rate-of-change mapped to a trend component of 100
    pub trend_danger_rate: f32,

    /// Consecutive flame ticks for the confirmed-fire short circuit
    pub flame_persist_threshold: u32,

    /// Informational z-score threshold for "statistically significant"
    ///
    /// Not consumed by the classifier (which uses absolute score
    /// thresholds); surfaced for dashboards.
    pub z_score_warning: f32,

    /// Informational z-score threshold for "very high deviation"
    pub z_score_high_risk: f32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            weights: FusionWeights::default(),
            gas_safe_threshold: GAS_SAFE_THRESHOLD,
            gas_danger_threshold: GAS_DANGER_THRESHOLD,
            trend_danger_rate: TREND_DANGER_RATE,
            flame_persist_threshold: FLAME_PERSIST_THRESHOLD,
            z_score_warning: Z_SCORE_WARNING,
            z_score_high_risk: Z_SCORE_HIGH_RISK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_convex() {
        let w = FusionWeights::default();
        let sum = w.z + w.trend + w.absolute + w.flame;
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn default_thresholds_are_ordered() {
        let cfg = RiskConfig::default();
        assert!(cfg.gas_safe_threshold < cfg.gas_danger_threshold);
        assert!(cfg.z_score_warning < cfg.z_score_high_risk);
        assert!(cfg.flame_persist_threshold > 0);
    }
}
