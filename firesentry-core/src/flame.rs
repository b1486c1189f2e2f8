//! Flame Persistence Tracking
//!
//! IR flame sensors are glitchy: direct sunlight, hot exhaust, or a
//! camera flash can assert the pin for a tick or two. The pipeline
//! therefore tracks *consecutive* ticks with flame asserted and only
//! treats sustained assertion as a confirmed fire (the fusion short
//! circuit). A single clear tick resets the count to zero.

/// Counter of consecutive ticks with flame asserted
///
/// Increments once per asserted tick, resets to 0 the instant the flame
/// input is clear. No cap beyond the fusion threshold is enforced - the
/// count may grow while a fire burns, though it saturates rather than
/// wraps (a wrap would momentarily drop the confirmed-fire override).
#[derive(Debug, Clone, Copy, Default)]
pub struct FlamePersistence {
    ticks: u32,
}

impl FlamePersistence {
    /// Creates a counter at zero
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Feeds one tick's flame reading, returning the updated count
    pub fn observe(&mut self, asserted: bool) -> u32 {
        self.ticks = if asserted {
            self.ticks.saturating_add(1)
        } else {
            0
        };
        self.ticks
    }

    /// Current consecutive-tick count
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}
