//! Sources for the secret number.

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{instrument, trace};

/// Draws an integer uniformly from an inclusive range.
///
/// Bounds always come from the difficulty catalog, so `low > high` is a
/// programming error and implementations panic on it.
pub trait RangePicker {
    /// Returns a value in `[low, high]`.
    fn pick(&mut self, low: i64, high: i64) -> i64;
}

impl<P: RangePicker + ?Sized> RangePicker for &mut P {
    fn pick(&mut self, low: i64, high: i64) -> i64 {
        (**self).pick(low, high)
    }
}

/// Picker backed by the thread-local RNG.
#[derive(Debug, Clone)]
pub struct ThreadRngPicker {
    rng: ThreadRng,
}

impl ThreadRngPicker {
    /// Creates a picker drawing from the thread-local RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRngPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl RangePicker for ThreadRngPicker {
    #[instrument(skip(self))]
    fn pick(&mut self, low: i64, high: i64) -> i64 {
        assert!(low <= high, "empty range: {low} > {high}");
        let value = self.rng.random_range(low..=high);
        trace!(value, "Picked secret");
        value
    }
}

/// Picker that always returns the same value. Useful for scripted rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPicker {
    value: i64,
}

impl FixedPicker {
    /// Creates a picker that always yields `value`.
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl RangePicker for FixedPicker {
    fn pick(&mut self, low: i64, high: i64) -> i64 {
        assert!(low <= high, "empty range: {low} > {high}");
        assert!(
            (low..=high).contains(&self.value),
            "fixed value {} outside {low}..={high}",
            self.value
        );
        self.value
    }
}
