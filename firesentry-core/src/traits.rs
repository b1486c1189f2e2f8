//! Collaborator Seams for the Risk Pipeline
//!
//! ## Overview
//!
//! The core treats sensor acquisition, actuator output, and telemetry
//! transport as external collaborators behind small traits. Data flows
//! strictly one direction per tick - source → core → sinks - and no
//! sink holds a reference back into the core.
//!
//! ```text
//! SensorSource ──► RiskPipeline ──► AlertSink (discrete state only)
//!                        │
//!                        └────────► TelemetrySink (full TickRecord)
//! ```
//!
//! ## Non-Blocking Convention
//!
//! [`SensorSource`] uses `nb::Result`, the embedded-Rust convention for
//! polling without a runtime:
//!
//! - `Ok(frame)` - a fresh frame is available
//! - `Err(nb::Error::WouldBlock)` - no frame yet, poll again next tick
//! - `Err(nb::Error::Other(e))` - an actual sensor failure

use crate::errors::{SensorError, TelemetryError};
use crate::pipeline::TickRecord;
use crate::state::AlertState;
use heapless::Vec;

/// One tick's worth of raw sensor input
///
/// The gas reading is already smoothed by the source (the core does no
/// raw-signal conditioning); the flame reading is a debounce-free
/// boolean - persistence filtering happens inside the core.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorFrame {
    /// Smoothed gas level in raw ADC units
    pub gas: f32,
    /// True if the flame sensor is asserted this tick
    pub flame: bool,
}

/// Produces one [`SensorFrame`] per tick
pub trait SensorSource {
    /// Attempts to read the current frame
    ///
    /// Should not block: return `nb::Error::WouldBlock` when no fresh
    /// frame is available and let the driver skip the tick.
    fn poll_frame(&mut self) -> nb::Result<SensorFrame, SensorError>;
}

/// Receives the classified alert state each tick
///
/// Alert sinks only ever see the discrete state, never the core's
/// internal statistics. Implementations typically drive LED/buzzer
/// cadence (see [`crate::alarm`]) at a higher poll frequency than the
/// tick rate.
pub trait AlertSink {
    /// Informs the sink of the state computed this tick
    ///
    /// Called every tick, including when the state is unchanged;
    /// deduplication is the sink's business (the cadence machines reset
    /// phase only on an actual transition).
    fn set_state(&mut self, state: AlertState);
}

/// Receives the full per-tick record for an external observer
pub trait TelemetrySink {
    /// Publishes one record
    fn publish(&mut self, record: &TickRecord) -> Result<(), TelemetryError>;
}

/// Fixed-capacity in-memory telemetry sink
///
/// Captures records into a `heapless::Vec` for tests, demos, and small
/// on-device history buffers. Returns [`TelemetryError::BufferFull`]
/// once capacity is reached rather than silently dropping.
#[derive(Debug, Default)]
pub struct MemoryTelemetrySink<const C: usize> {
    records: Vec<TickRecord, C>,
}

impl<const C: usize> MemoryTelemetrySink<C> {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Records captured so far, oldest first
    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }
}

impl<const C: usize> TelemetrySink for MemoryTelemetrySink<C> {
    fn publish(&mut self, record: &TickRecord) -> Result<(), TelemetryError> {
        self.records
            .push(record.clone())
            .map_err(|_| TelemetryError::BufferFull)
    }
}

/// Alert sink that just remembers the latest state
///
/// Useful in tests and as a shared cell between the tick loop and a
/// faster actuator loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct LatestStateSink {
    state: Option<AlertState>,
}

impl LatestStateSink {
    /// Creates a sink with no state observed yet
    pub fn new() -> Self {
        Self { state: None }
    }

    /// The most recently observed state
    pub fn state(&self) -> Option<AlertState> {
        self.state
    }
}

impl AlertSink for LatestStateSink {
    fn set_state(&mut self, state: AlertState) {
        self.state = Some(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_reports_overflow() {
        let mut sink: MemoryTelemetrySink<2> = MemoryTelemetrySink::new();
        let record = TickRecord::default();

        assert!(sink.publish(&record).is_ok());
        assert!(sink.publish(&record).is_ok());
        assert_eq!(sink.publish(&record), Err(TelemetryError::BufferFull));
        assert_eq!(sink.records().len(), 2);
    }

    #[test]
    fn latest_state_sink_tracks_transitions() {
        let mut sink = LatestStateSink::new();
        assert!(sink.state().is_none());

        sink.set_state(AlertState::Safe);
        sink.set_state(AlertState::Warning);
        assert_eq!(sink.state(), Some(AlertState::Warning));
    }
}
