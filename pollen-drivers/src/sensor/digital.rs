//! Digital pin driver
//!
//! Buttons, switches and contacts. The logical level (after optional
//! active-low inversion) is fed to an aggregator every cycle.

use pollen_core::traits::{Aggregator, Driver};
use pollen_hal::InputPin;

/// Single digital line reader
pub struct DigitalPinDriver<P, A> {
    pin: P,
    /// If true, active = pin LOW
    inverted: bool,
    data: A,
}

impl<P: InputPin, A: Aggregator<bool>> DigitalPinDriver<P, A> {
    /// Create a new digital pin driver
    ///
    /// # Arguments
    /// - `pin`: The input pin to sample
    /// - `inverted`: If true, the input is active when the pin is LOW
    /// - `data`: Aggregator receiving the logical level
    pub fn new(pin: P, inverted: bool, data: A) -> Self {
        Self {
            pin,
            inverted,
            data,
        }
    }

    /// Create a driver for an active-high input
    pub fn new_active_high(pin: P, data: A) -> Self {
        Self::new(pin, false, data)
    }

    /// Create a driver for an active-low input (pull-up to a grounded switch)
    pub fn new_active_low(pin: P, data: A) -> Self {
        Self::new(pin, true, data)
    }

    /// Current aggregated level
    pub fn is_active(&self) -> bool {
        self.data.get()
    }

    /// Get access to the aggregator
    pub fn data(&self) -> &A {
        &self.data
    }
}

impl<P: InputPin, A: Aggregator<bool>> Driver for DigitalPinDriver<P, A> {
    fn read(&mut self) -> bool {
        let active = self.pin.is_high() != self.inverted;
        self.data.add(active);
        true
    }
}
