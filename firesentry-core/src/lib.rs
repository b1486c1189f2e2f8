//! Adaptive risk-scoring core for Firesentry
//!
//! Fuses a gas sensor and a flame sensor into a single discrete alert
//! state using an adaptive statistical baseline. Designed for edge
//! devices with limited resources.
//!
//! Key constraints:
//! - Runs on 32KB RAM (ESP32)
//! - No heap allocation in hot path
//! - Bounded, deterministic per-tick cost (one O(window) scan)
//!
//! ```no_run
//! use firesentry_core::{RiskPipeline, RiskConfig, SensorFrame, AlertState};
//!
//! let mut pipeline: RiskPipeline<60> = RiskPipeline::new(RiskConfig::default());
//!
//! // One tick: reading -> statistics -> fusion -> classification
//! let record = pipeline.tick(SensorFrame { gas: 412.0, flame: false }, 1000);
//!
//! match record.state {
//!     AlertState::Emergency => {}, // Confirmed fire
//!     _ => {},                     // Keep watching
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod alarm;
pub mod buffer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod flame;
pub mod fusion;
pub mod pipeline;
pub mod state;
pub mod stats;
pub mod time;
pub mod traits;

// Public API
pub use config::{FusionWeights, RiskConfig};
pub use errors::{PipelineError, SensorError, TelemetryError};
pub use flame::FlamePersistence;
pub use fusion::RiskFusion;
pub use pipeline::{PipelineDriver, RiskPipeline, TickRecord};
pub use state::{classify, AlertState};
pub use stats::RollingStatistics;
pub use traits::{AlertSink, SensorFrame, SensorSource, TelemetrySink};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
