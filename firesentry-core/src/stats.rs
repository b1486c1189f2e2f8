//! Rolling Baseline Statistics for the Gas Channel
//!
//! ## Overview
//!
//! Maintains the adaptive statistical baseline of ambient gas level:
//! mean, population standard deviation, z-score of the current reading,
//! and the signed rate-of-change across the whole window.
//!
//! ## Why Full Scans Instead of Running Sums?
//!
//! Mean and standard deviation are recomputed by a full O(N) scan on
//! every call rather than maintained as incremental accumulators. Running
//! sums accumulate floating-point error over days of uptime; a fresh scan
//! cannot drift. At window sizes in the tens-to-hundreds of samples and
//! tick rates of hundreds of milliseconds, the scan costs microseconds on
//! a 240 MHz ESP32 - negligible against the tick period.
//!
//! ## Readiness Contract
//!
//! `z_score` and `rate_of_change` are only meaningful once
//! `is_baseline_ready()` returns true (the window has wrapped once).
//! Callers must check readiness first; the pipeline reports both as 0.0
//! and classifies as `Bootup` until then.

use crate::buffer::RollingWindow;
use crate::constants::{MS_PER_SECOND, STD_DEV_FLOOR};

/// Rolling statistics over the last `N` gas readings
///
/// Owns the circular window exclusively; the only mutation path is
/// `add_sample`. Derived statistics are never cached across ticks.
#[derive(Debug, Clone)]
pub struct RollingStatistics<const N: usize> {
    window: RollingWindow<N>,

    /// Tick interval in milliseconds, for per-second rate conversion
    tick_interval_ms: u32,
}

impl<const N: usize> RollingStatistics<N> {
    /// Creates empty statistics for the given tick interval
    pub const fn new(tick_interval_ms: u32) -> Self {
        Self {
            window: RollingWindow::new(),
            tick_interval_ms,
        }
    }

    /// Appends one gas reading to the window
    pub fn add_sample(&mut self, value: f32) {
        self.window.push(value);
    }

    /// Arithmetic mean over the valid portion of the window
    ///
    /// Returns 0.0 before any sample arrives. During the learning phase
    /// this is the partial-window mean, used only for diagnostics - no
    /// control decision reads it before `is_baseline_ready()`.
    pub fn mean(&self) -> f32 {
        if self.window.is_empty() {
            return 0.0;
        }

        let sum: f32 = self.window.iter().sum();
        sum / self.window.len() as f32
    }

    /// Population standard deviation over the valid portion
    ///
    /// Returns 0.0 with fewer than 2 samples, guarding the downstream
    /// division.
    pub fn std_dev(&self) -> f32 {
        let count = self.window.len();
        if count < 2 {
            return 0.0;
        }

        let mean = self.mean();
        let variance_sum: f32 = self.window.iter().map(|v| {
            let diff = v - mean;
            diff * diff
        }).sum();

        libm::sqrtf(variance_sum / count as f32)
    }

    /// Standardized deviation of `value` from the learned baseline
    ///
    /// The divisor is floored to [`STD_DEV_FLOOR`] so a near-constant
    /// signal cannot blow the score up to infinity. Only meaningful once
    /// the baseline is ready.
    pub fn z_score(&self, value: f32) -> f32 {
        let std_dev = self.std_dev().max(STD_DEV_FLOOR);
        (value - self.mean()) / std_dev
    }

    /// Signed gas rise rate in units per second across the window
    ///
    /// `(newest - evicted) / window_duration`, where the window duration
    /// is `N × tick_interval`. Zero until the window has wrapped once
    /// (no evicted sample exists yet).
    pub fn rate_of_change(&self) -> f32 {
        let (Some(newest), Some(oldest)) = (self.window.last(), self.window.last_evicted()) else {
            return 0.0;
        };

        let window_duration_secs =
            N as f32 * self.tick_interval_ms as f32 / MS_PER_SECOND as f32;
        if window_duration_secs <= 0.0 {
            return 0.0;
        }

        (newest - oldest) / window_duration_secs
    }

    /// One-way latch: true once the window has been filled completely
    ///
    /// Once ready, always ready - erratic later readings never revoke a
    /// learned baseline.
    pub fn is_baseline_ready(&self) -> bool {
        self.window.has_wrapped()
    }

    /// Number of samples collected so far (saturates at `N`)
    pub fn sample_count(&self) -> usize {
        self.window.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_are_zero() {
        let stats: RollingStatistics<10> = RollingStatistics::new(500);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.std_dev(), 0.0);
        assert_eq!(stats.rate_of_change(), 0.0);
        assert!(!stats.is_baseline_ready());
    }

    #[test]
    fn mean_of_ascending_sequence() {
        // [1..=N] into a window of size N: mean = (N+1)/2
        let mut stats: RollingStatistics<10> = RollingStatistics::new(1000);
        for i in 1..=10 {
            stats.add_sample(i as f32);
        }
        assert!((stats.mean() - 5.5).abs() < 1e-6);
        assert!(stats.is_baseline_ready());
    }

    #[test]
    fn std_dev_needs_two_samples() {
        let mut stats: RollingStatistics<10> = RollingStatistics::new(500);
        stats.add_sample(42.0);
        assert_eq!(stats.std_dev(), 0.0);

        stats.add_sample(44.0);
        // Population std dev of {42, 44} = 1
        assert!((stats.std_dev() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn z_score_floors_divisor_on_flat_signal() {
        let mut stats: RollingStatistics<5> = RollingStatistics::new(1000);
        for _ in 0..5 {
            stats.add_sample(10.0);
        }

        // std dev is 0, floored to 0.1; numerator 0 keeps z at 0
        assert_eq!(stats.z_score(10.0), 0.0);

        // A jump of 1.0 over floored divisor 0.1 gives z = 10
        assert!((stats.z_score(11.0) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn rate_of_change_after_eviction() {
        // Window 10, tick 1s: duration 10s. Push [1..=10], then 11
        // evicts 1; rate = (11 - 1) / 10 = 1.0/s
        let mut stats: RollingStatistics<10> = RollingStatistics::new(1000);
        for i in 1..=10 {
            stats.add_sample(i as f32);
        }
        assert_eq!(stats.rate_of_change(), 0.0);

        stats.add_sample(11.0);
        assert!((stats.rate_of_change() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn baseline_latch_survives_erratic_samples() {
        let mut stats: RollingStatistics<4> = RollingStatistics::new(500);
        for i in 0..3 {
            stats.add_sample(i as f32);
            assert!(!stats.is_baseline_ready());
        }
        stats.add_sample(3.0);
        assert!(stats.is_baseline_ready());

        for v in [1e9, -1e9, 0.0] {
            stats.add_sample(v);
            assert!(stats.is_baseline_ready());
        }
    }
}
