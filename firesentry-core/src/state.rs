//! Alert States and the Risk Classifier
//!
//! ## Overview
//!
//! Maps the fused risk score to one of five discrete alert states. The
//! classifier is a stateless, memoryless pure function re-evaluated from
//! scratch every tick: the next state depends only on the current score
//! and baseline readiness, never on the previous state.
//!
//! ## Boundary Flicker
//!
//! Because there is no hysteresis, a score oscillating around a
//! threshold can legally flicker between adjacent states tick-to-tick.
//! This is an accepted property of the contract, not a bug. If
//! hysteresis is ever wanted it belongs in a separate, separately tested
//! wrapper - not folded into this pure function.

/// Discrete alert state of the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AlertState {
    /// Baseline still learning; the risk score is not trustworthy yet
    Bootup = 0,
    /// Ambient conditions, score below the warning threshold
    Safe = 1,
    /// Elevated gas levels, score in [40, 80)
    Warning = 2,
    /// Significant gas/smoke signature, score in [80, 100)
    HighRisk = 3,
    /// Confirmed fire, score 100
    Emergency = 4,
}

impl AlertState {
    /// Human-readable state name, as emitted in telemetry records
    pub const fn name(&self) -> &'static str {
        match self {
            AlertState::Bootup => "BOOTUP",
            AlertState::Safe => "SAFE",
            AlertState::Warning => "WARNING",
            AlertState::HighRisk => "HIGH_RISK",
            AlertState::Emergency => "EMERGENCY",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlertState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name());
    }
}

/// Risk score at or above which the state is [`AlertState::Emergency`]
pub const EMERGENCY_THRESHOLD: f32 = 100.0;

/// Risk score at or above which the state is [`AlertState::HighRisk`]
pub const HIGH_RISK_THRESHOLD: f32 = 80.0;

/// Risk score at or above which the state is [`AlertState::Warning`]
pub const WARNING_THRESHOLD: f32 = 40.0;

/// Classifies a risk score into an alert state
///
/// Thresholds are half-open on the low end (`>=`): a score exactly on a
/// boundary goes to the higher-severity state. While the baseline is not
/// ready the score is not trustworthy and the result is always
/// [`AlertState::Bootup`].
pub fn classify(risk_score: f32, baseline_ready: bool) -> AlertState {
    if !baseline_ready {
        return AlertState::Bootup;
    }

    if risk_score >= EMERGENCY_THRESHOLD {
        AlertState::Emergency
    } else if risk_score >= HIGH_RISK_THRESHOLD {
        AlertState::HighRisk
    } else if risk_score >= WARNING_THRESHOLD {
        AlertState::Warning
    } else {
        AlertState::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ready_is_always_bootup() {
        assert_eq!(classify(0.0, false), AlertState::Bootup);
        assert_eq!(classify(100.0, false), AlertState::Bootup);
        assert_eq!(classify(f32::NAN, false), AlertState::Bootup);
    }

    #[test]
    fn boundary_table() {
        assert_eq!(classify(39.9, true), AlertState::Safe);
        assert_eq!(classify(40.0, true), AlertState::Warning);
        assert_eq!(classify(79.9, true), AlertState::Warning);
        assert_eq!(classify(80.0, true), AlertState::HighRisk);
        assert_eq!(classify(99.9, true), AlertState::HighRisk);
        assert_eq!(classify(100.0, true), AlertState::Emergency);
    }

    #[test]
    fn state_names() {
        assert_eq!(AlertState::HighRisk.name(), "HIGH_RISK");
        assert_eq!(AlertState::Bootup.name(), "BOOTUP");
    }
}
