//! Multi-Feature Risk Fusion
//!
//! ## Overview
//!
//! Combines four independently normalized risk features into one bounded
//! score in [0, 100]:
//!
//! 1. **Z-score** - statistical deviation from the learned gas baseline
//! 2. **Trend** - gas rise rate across the rolling window
//! 3. **Absolute reading** - raw gas level against fixed thresholds
//! 4. **Flame persistence** - pre-confirmation partial credit for a
//!    flame that has not yet been asserted long enough to confirm
//!
//! ```text
//! z-score ──► z-map ────────┐
//! rate ─────► trend-map ────┤  convex        ┌── 100: confirmed fire only
//! reading ──► absolute-map ─┼─ weighted ──►  ├── [0, 99]: fused score
//! flame ────► flame-map ────┘  sum           └── clamp per component first
//! ```
//!
//! ## Score Semantics
//!
//! The fused score is clamped to [0, 99]; exactly 100 is produced only
//! by the confirmed-fire short circuit (flame asserted for the
//! configured number of consecutive ticks). Downstream consumers can
//! therefore distinguish "fusion says maximum" from "flame sensor
//! confirmed" without a side channel.
//!
//! ## Clamping Discipline
//!
//! Every sub-map clamps its own output to [0, 100] and maps non-finite
//! inputs to its floor. A pathological reading (negative, huge, NaN)
//! can never push the fused score outside its contract, per-component
//! weight misconfiguration aside - weights are trusted to sum to 1.0.

use crate::config::RiskConfig;
use crate::constants::{FUSED_SCORE_CEILING, RISK_SCORE_MAX, Z_ALARM_CEILING,
    Z_COMPONENT_AT_ALARM_CEILING, Z_COMPONENT_AT_NOISE_CEILING, Z_NOISE_CEILING};

/// Slope of the z-map above the alarm ceiling (continues linearly to 100)
///
/// Matches the noise-band slope: 5 component points per unit of z.
const Z_TAIL_SLOPE: f32 = 5.0;

/// Clamp a component contribution to [0, 100], treating non-finite as 0
///
/// NaN comparisons are always false, so a plain `clamp` would propagate
/// NaN into the weighted sum; the explicit finiteness check keeps the
/// boundary airtight.
fn clamp_component(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Risk fusion function, parameterized by a [`RiskConfig`]
///
/// Pure and stateless: every method depends only on its arguments and
/// the captured configuration. The flame persistence counter lives in
/// the pipeline driver, not here.
#[derive(Debug, Clone, Copy)]
pub struct RiskFusion {
    config: RiskConfig,
}

impl RiskFusion {
    /// Creates a fusion function with the given configuration
    pub const fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Z-score contribution in [0, 100]
    ///
    /// Piecewise linear:
    /// - z ≤ 0: 0 (readings below baseline are never risky)
    /// - 0 < z ≤ 2: noise band, 0 → 10
    /// - 2 < z ≤ 6: alarm ramp, 10 → 80
    /// - z > 6: tail at 5 points per unit of z, clamped at 100
    pub fn z_component(&self, z_score: f32) -> f32 {
        if !z_score.is_finite() || z_score <= 0.0 {
            return 0.0;
        }

        let raw = if z_score <= Z_NOISE_CEILING {
            z_score * (Z_COMPONENT_AT_NOISE_CEILING / Z_NOISE_CEILING)
        } else if z_score <= Z_ALARM_CEILING {
            let ramp_slope = (Z_COMPONENT_AT_ALARM_CEILING - Z_COMPONENT_AT_NOISE_CEILING)
                / (Z_ALARM_CEILING - Z_NOISE_CEILING);
            Z_COMPONENT_AT_NOISE_CEILING + (z_score - Z_NOISE_CEILING) * ramp_slope
        } else {
            Z_COMPONENT_AT_ALARM_CEILING + (z_score - Z_ALARM_CEILING) * Z_TAIL_SLOPE
        };

        clamp_component(raw)
    }

    /// Trend contribution in [0, 100]
    ///
    /// Falling or stable gas is never risky: 0 for rate ≤ 0. A rising
    /// rate scales linearly to 100 at the configured danger rate.
    pub fn trend_component(&self, rate_of_change: f32) -> f32 {
        if !rate_of_change.is_finite() || rate_of_change <= 0.0 {
            return 0.0;
        }

        clamp_component(rate_of_change / self.config.trend_danger_rate * 100.0)
    }

    /// Absolute-reading contribution in [0, 100]
    ///
    /// 0 below the safe threshold, 100 above the danger threshold,
    /// linear interpolation between.
    pub fn absolute_component(&self, reading: f32) -> f32 {
        if !reading.is_finite() || reading <= self.config.gas_safe_threshold {
            return 0.0;
        }
        if reading >= self.config.gas_danger_threshold {
            return 100.0;
        }

        let span = self.config.gas_danger_threshold - self.config.gas_safe_threshold;
        clamp_component((reading - self.config.gas_safe_threshold) / span * 100.0)
    }

    /// Flame-persistence contribution in [0, 100]
    ///
    /// Pre-confirmation partial credit: 0 at zero ticks, 100 at the
    /// confirmed-fire threshold, linear in between.
    pub fn flame_component(&self, persistence_ticks: u32) -> f32 {
        let threshold = self.config.flame_persist_threshold;
        if threshold == 0 {
            return if persistence_ticks > 0 { 100.0 } else { 0.0 };
        }

        clamp_component(persistence_ticks as f32 / threshold as f32 * 100.0)
    }

    /// Fuses all features into a risk score
    ///
    /// Returns exactly [`RISK_SCORE_MAX`] (100) when the flame sensor is
    /// asserted and has been for at least the confirmed-fire threshold;
    /// otherwise the convex weighted sum of the four components, clamped
    /// to [0, 99].
    pub fn compute(
        &self,
        z_score: f32,
        rate_of_change: f32,
        reading: f32,
        flame_persistence_ticks: u32,
        flame_asserted: bool,
    ) -> f32 {
        // Confirmed fire overrides everything
        if flame_asserted && flame_persistence_ticks >= self.config.flame_persist_threshold {
            return RISK_SCORE_MAX;
        }

        let w = &self.config.weights;
        let fused = self.z_component(z_score) * w.z
            + self.trend_component(rate_of_change) * w.trend
            + self.absolute_component(reading) * w.absolute
            + self.flame_component(flame_persistence_ticks) * w.flame;

        if !fused.is_finite() {
            return 0.0;
        }
        fused.clamp(0.0, FUSED_SCORE_CEILING)
    }
}
