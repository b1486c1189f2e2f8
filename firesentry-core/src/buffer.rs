//! Fixed-Size Circular Window for the Gas Baseline
//!
//! ## Overview
//!
//! This module provides the ring buffer that backs the adaptive gas
//! baseline. The capacity is a compile-time constant (const generic), so
//! the window is fully pre-allocated and never touches the heap - the
//! same discipline as every other hot-path structure in this crate.
//!
//! ## Design Rationale
//!
//! The risk pipeline needs two things from its history:
//!
//! - The current window contents, for mean / standard deviation / z-score.
//! - The value that *left* the window on the latest push, for
//!   rate-of-change: `(newest - evicted) / window_duration`.
//!
//! A circular buffer gives both with O(1) insertion: when full, the slot
//! about to be overwritten holds exactly the oldest sample, so we capture
//! it before the write.
//!
//! ## The Full Latch
//!
//! `has_wrapped()` is a one-way latch. Once the cursor has completed a
//! full cycle the baseline is considered learned for the lifetime of the
//! window, even if later readings are erratic - the system does not
//! "unlearn" a baseline. Consequently there is no `clear()`: resetting
//! the baseline means constructing a new window.
//!
//! ## Memory Layout
//!
//! ```text
//! RollingWindow<600> (the firmware default, one minute at 100 ms):
//! ┌─────┬─────┬─────┬ ... ┬─────┐
//! │ f32 │ f32 │ f32 │     │ f32 │   600 × 4 bytes = 2400 bytes
//! └─────┴─────┴─────┴ ... ┴─────┘
//! + write cursor + len + evicted slot + latch ≈ 24 bytes
//! ```

/// Fixed-size circular window of gas readings
///
/// Overwrites the oldest sample once full and records the evicted value,
/// making it suitable for both baseline statistics and rate-of-change.
///
/// ## Type Parameter
///
/// - `N`: window capacity in samples, fixed at compile time. The modulo
///   in `push` compiles to a bit mask when `N` is a power of 2, but the
///   firmware default of 600 (one minute at 100 ms) is also fine at
///   these rates.
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - `len <= N`, and `len == N` exactly when the window has wrapped
/// - `has_wrapped()` never transitions back to `false`
#[derive(Debug, Clone)]
pub struct RollingWindow<const N: usize> {
    /// Sample storage, oldest-to-newest in logical index order
    data: [f32; N],

    /// Index where the next write will occur, wraps modulo N
    write_pos: usize,

    /// Number of valid samples; grows to N and stays there
    len: usize,

    /// Value overwritten by the most recent push, once wrapped
    last_evicted: Option<f32>,
}

impl<const N: usize> RollingWindow<N> {
    /// Creates a new empty window
    ///
    /// Const so windows can live in static storage on embedded targets:
    /// ```rust
    /// use firesentry_core::buffer::RollingWindow;
    /// static BASELINE: RollingWindow<600> = RollingWindow::new();
    /// ```
    pub const fn new() -> Self {
        Self {
            data: [0.0; N],
            write_pos: 0,
            len: 0,
            last_evicted: None,
        }
    }

    /// Appends a sample, overwriting the oldest once full
    ///
    /// The value about to be overwritten is captured into the evicted
    /// slot *before* the write, so `last_evicted()` always refers to the
    /// sample that just left the window.
    pub fn push(&mut self, value: f32) {
        if self.len == N {
            self.last_evicted = Some(self.data[self.write_pos]);
        }

        self.data[self.write_pos] = value;
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of valid samples stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no samples have been pushed yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One-way latch: true once the window has been filled completely
    ///
    /// Never resets; this is the baseline-readiness signal.
    pub fn has_wrapped(&self) -> bool {
        self.len == N
    }

    /// The most recently pushed sample
    pub fn last(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        Some(self.data[idx])
    }

    /// The value overwritten by the most recent push
    ///
    /// `None` until the window has wrapped at least once.
    pub fn last_evicted(&self) -> Option<f32> {
        self.last_evicted
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> RollingWindowIter<'_, N> {
        RollingWindowIter {
            window: self,
            index: 0,
        }
    }

    /// Gets a sample by logical index (0 = oldest, len-1 = newest)
    ///
    /// When the window is not full, logical and physical indices match.
    /// When full, the oldest element sits at `write_pos`:
    ///
    /// ```text
    /// Physical array:  [D, E, A, B, C]  (write_pos = 2)
    /// Logical view:    [A, B, C, D, E]
    /// Mapping: logical[i] = physical[(write_pos + i) % N]
    /// ```
    fn get(&self, index: usize) -> Option<f32> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        Some(self.data[actual_index])
    }
}

/// Iterator over window contents, oldest to newest
pub struct RollingWindowIter<'a, const N: usize> {
    window: &'a RollingWindow<N>,
    index: usize,
}

impl<const N: usize> Iterator for RollingWindowIter<'_, N> {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.window.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

impl<const N: usize> Default for RollingWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window() {
        let window: RollingWindow<5> = RollingWindow::new();
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert!(window.last().is_none());
        assert!(window.last_evicted().is_none());
        assert!(!window.has_wrapped());
    }

    #[test]
    fn push_and_retrieve() {
        let mut window = RollingWindow::<5>::new();

        window.push(412.5);
        assert_eq!(window.len(), 1);
        assert_eq!(window.last(), Some(412.5));
        assert!(!window.has_wrapped());
    }

    #[test]
    fn circular_overwrite_records_eviction() {
        let mut window = RollingWindow::<3>::new();

        for i in 0..5 {
            window.push(i as f32);
        }

        assert_eq!(window.len(), 3);
        assert!(window.has_wrapped());

        // 0 and 1 were evicted, 1 most recently
        assert_eq!(window.last_evicted(), Some(1.0));

        let mut iter = window.iter();
        assert_eq!(iter.next(), Some(2.0));
        assert_eq!(iter.next(), Some(3.0));
        assert_eq!(iter.next(), Some(4.0));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iterator_order() {
        let mut window = RollingWindow::<4>::new();

        for i in 0..6 {
            window.push(i as f32);
        }

        // Oldest to newest after two evictions
        let mut iter = window.iter();
        assert_eq!(iter.next(), Some(2.0));
        assert_eq!(iter.next(), Some(3.0));
        assert_eq!(iter.next(), Some(4.0));
        assert_eq!(iter.next(), Some(5.0));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn wrap_latch_is_permanent() {
        let mut window = RollingWindow::<2>::new();
        window.push(1.0);
        assert!(!window.has_wrapped());
        window.push(2.0);
        assert!(window.has_wrapped());

        // Latch holds through arbitrary further pushes
        for _ in 0..10 {
            window.push(9999.0);
            assert!(window.has_wrapped());
        }
    }
}
