//! Analog input abstractions

use core::cell::RefCell;

/// Analog line reader
///
/// Samples the analog line identified by `pin` and returns the raw
/// converter value. Reads are synchronous and always succeed; there is
/// no error channel.
pub trait AnalogPins {
    /// Read the raw value on the given pin
    fn read_pin(&mut self, pin: u8) -> u16;
}

impl<A: AnalogPins + ?Sized> AnalogPins for &mut A {
    fn read_pin(&mut self, pin: u8) -> u16 {
        (**self).read_pin(pin)
    }
}

/// Shared converter
///
/// Boards usually have one ADC multiplexed across several lines. Wrapping
/// it in a `RefCell` lets several drivers hold a handle to it from the
/// same control flow.
impl<A: AnalogPins> AnalogPins for &RefCell<A> {
    fn read_pin(&mut self, pin: u8) -> u16 {
        self.borrow_mut().read_pin(pin)
    }
}

/// Last good conversion on one analog line
///
/// `AnalogPins` has no error channel. Implementations whose converter can
/// fail keep one of these per line and repeat the previous good value
/// when a conversion fails. Reads 0 until the first good conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeldReading {
    last: u16,
}

impl HeldReading {
    /// Create with no good conversion yet
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Record a conversion result and return the value to report
    pub fn update<E>(&mut self, reading: Result<u16, E>) -> u16 {
        if let Ok(value) = reading {
            self.last = value;
        }
        self.last
    }

    /// Last good value
    pub const fn last(&self) -> u16 {
        self.last
    }
}
