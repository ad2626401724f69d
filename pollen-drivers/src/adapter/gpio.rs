//! `embedded-hal` digital input adapter

use core::cell::RefCell;

use pollen_hal::InputPin;

/// Adapts an `embedded_hal::digital::InputPin` to [`InputPin`]
///
/// `embedded-hal` 1.0 reads pins through `&mut self` and a `Result`;
/// a failed read is reported as low.
pub struct HalInput<P> {
    pin: RefCell<P>,
}

impl<P: embedded_hal::digital::InputPin> HalInput<P> {
    /// Wrap a pin
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
        }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin.into_inner()
    }
}

impl<P: embedded_hal::digital::InputPin> InputPin for HalInput<P> {
    fn is_high(&self) -> bool {
        self.pin.borrow_mut().is_high().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    struct MockPin {
        level: Result<bool, ErrorKind>,
    }

    impl ErrorType for MockPin {
        type Error = ErrorKind;
    }

    impl embedded_hal::digital::InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, ErrorKind> {
            self.level
        }

        fn is_low(&mut self) -> Result<bool, ErrorKind> {
            self.level.map(|high| !high)
        }
    }

    #[test]
    fn test_levels() {
        let pin = HalInput::new(MockPin { level: Ok(true) });
        assert!(pin.is_high());
        assert!(!pin.is_low());

        let pin = HalInput::new(MockPin { level: Ok(false) });
        assert!(pin.is_low());
    }

    #[test]
    fn test_error_reads_low() {
        let pin = HalInput::new(MockPin {
            level: Err(ErrorKind::Other),
        });
        assert!(!pin.is_high());
    }
}
