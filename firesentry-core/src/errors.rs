//! Error Types for the Pipeline Seams
//!
//! ## Design Philosophy
//!
//! The numeric core never errors: every edge case is absorbed by
//! clamping and epsilon-flooring (see `stats` and `fusion`). Errors
//! exist only at the collaborator seams - a sensor that cannot produce a
//! frame, a telemetry sink that cannot accept a record.
//!
//! Following embedded constraints:
//!
//! 1. **Small Size**: variants carry at most a `&'static str` reason
//! 2. **No Heap Allocation**: no `String`, deterministic memory usage
//! 3. **Copy Semantics**: errors return cheaply from hot paths

use thiserror_no_std::Error;

/// Errors a sensor source can report when polled
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The sensor hardware did not respond
    #[error("sensor offline: {reason}")]
    Offline {
        /// Short description of the failure
        reason: &'static str,
    },

    /// The sensor produced a reading it flagged as invalid
    #[error("sensor fault: {reason}")]
    Fault {
        /// Short description of the failure
        reason: &'static str,
    },
}

/// Errors a telemetry sink can report when publishing a record
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryError {
    /// The sink's buffer is full; the record was dropped
    #[error("telemetry buffer full")]
    BufferFull,

    /// The sink is disconnected from its observer
    #[error("telemetry unavailable: {reason}")]
    Unavailable {
        /// Short description of the failure
        reason: &'static str,
    },
}

/// Errors surfaced by one driver tick
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    /// The sensor source had no frame ready this tick (`nb::WouldBlock`)
    #[error("sensor frame not ready")]
    SensorNotReady,

    /// The sensor source failed
    #[error("sensor: {0}")]
    Sensor(#[from] SensorError),

    /// The telemetry sink rejected the record
    ///
    /// The tick itself completed: statistics were updated and the alert
    /// sink received the new state before this error was raised.
    #[error("telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Offline { reason } => defmt::write!(fmt, "sensor offline: {}", reason),
            Self::Fault { reason } => defmt::write!(fmt, "sensor fault: {}", reason),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TelemetryError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::BufferFull => defmt::write!(fmt, "telemetry buffer full"),
            Self::Unavailable { reason } => defmt::write!(fmt, "telemetry unavailable: {}", reason),
        }
    }
}
