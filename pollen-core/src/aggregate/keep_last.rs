//! Keep-last aggregator

use crate::traits::Aggregator;

/// Reports the most recent sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeepLast<T> {
    value: T,
}

impl<T: Copy + Default> KeepLast<T> {
    /// Create an aggregator holding `T::default()`
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Copy + Default> Aggregator<T> for KeepLast<T> {
    fn reset(&mut self) {
        self.value = T::default();
    }

    fn add(&mut self, value: T) -> T {
        self.value = value;
        value
    }

    fn get(&self) -> T {
        self.value
    }
}
