//! Moving-average aggregator

use heapless::HistoryBuffer;

use super::Sample;
use crate::traits::Aggregator;

/// Moving average over the last `N` samples
///
/// Before the window fills up, the average covers the samples seen so
/// far. With no samples the aggregate is zero. Division truncates toward
/// zero.
pub struct Average<T, const N: usize> {
    window: HistoryBuffer<T, N>,
}

impl<T: Sample, const N: usize> Average<T, N> {
    const WINDOW_OK: () = assert!(N > 0, "average window must hold at least one sample");

    /// Create an empty averaging window
    pub fn new() -> Self {
        let () = Self::WINDOW_OK;
        Self {
            window: HistoryBuffer::new(),
        }
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if no sample has been added since the last reset
    pub fn is_empty(&self) -> bool {
        self.window.len() == 0
    }

    fn mean(&self) -> T {
        let samples = self.window.as_slice();
        if samples.is_empty() {
            return T::default();
        }

        let sum: i64 = samples.iter().map(|s| s.widen()).sum();
        T::narrow(sum / samples.len() as i64)
    }
}

impl<T: Sample, const N: usize> Default for Average<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample, const N: usize> Aggregator<T> for Average<T, N> {
    fn reset(&mut self) {
        self.window = HistoryBuffer::new();
    }

    fn add(&mut self, value: T) -> T {
        self.window.write(value);
        self.mean()
    }

    fn get(&self) -> T {
        self.mean()
    }
}
