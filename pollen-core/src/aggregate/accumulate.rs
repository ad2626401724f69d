//! Running-sum aggregator

use super::Sample;
use crate::traits::Aggregator;

/// Sums every sample since the last reset
///
/// The sum wraps at the bounds of `T`. Useful for counters (pulses,
/// button presses) that the application drains with `reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Accumulate<T> {
    total: T,
}

impl<T: Sample> Accumulate<T> {
    /// Create an aggregator with a zero total
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Sample> Aggregator<T> for Accumulate<T> {
    fn reset(&mut self) {
        self.total = T::default();
    }

    fn add(&mut self, value: T) -> T {
        self.total = self.total.wrapping_add(value);
        self.total
    }

    fn get(&self) -> T {
        self.total
    }
}
