//! Analog pin driver
//!
//! Reads one analog line per cycle and feeds the raw converter value to
//! an aggregator.

use pollen_core::traits::{Aggregator, Driver};
use pollen_hal::AnalogPins;

/// Single analog line reader
///
/// Analog reads have no failure mode, so every cycle reports a new value
/// (there is no "did it change" check).
pub struct AnalogPinDriver<P, A> {
    pins: P,
    pin: u8,
    data: A,
}

impl<P: AnalogPins, A: Aggregator<u16>> AnalogPinDriver<P, A> {
    /// Create a new analog pin driver
    ///
    /// # Arguments
    /// - `pins`: Converter handle (a `&RefCell` when shared between drivers)
    /// - `pin`: Line to sample
    /// - `data`: Aggregator receiving raw samples
    pub fn new(pins: P, pin: u8, data: A) -> Self {
        Self { pins, pin, data }
    }

    /// Sampled pin
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Current aggregated value
    pub fn value(&self) -> u16 {
        self.data.get()
    }

    /// Get access to the aggregator
    pub fn data(&self) -> &A {
        &self.data
    }

    /// Get mutable access to the aggregator (e.g. to reset it)
    pub fn data_mut(&mut self) -> &mut A {
        &mut self.data
    }
}

impl<P: AnalogPins, A: Aggregator<u16>> Driver for AnalogPinDriver<P, A> {
    fn read(&mut self) -> bool {
        let raw = self.pins.read_pin(self.pin);
        self.data.add(raw);
        true
    }
}
