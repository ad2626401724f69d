//! RP2040 implementations of the pollen-hal capabilities
//!
//! I2C and digital inputs go through the `embedded-hal` adapters in
//! `pollen-drivers`; the clock and the ADC need board-specific glue.

use defmt::*;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_time::Instant;
use heapless::Vec;
use pollen_hal::{AnalogPins, Clock, HeldReading};

/// RP2040 has 4 external ADC inputs (GPIO26-29)
pub const MAX_ADC_CHANNELS: usize = 4;

/// Millisecond clock backed by the embassy time driver
///
/// Truncating the 64-bit tick count to `u32` gives the wrapping
/// millisecond counter the poller expects.
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Blocking ADC with its configured input channels
pub struct BoardAdc {
    adc: Adc<'static, adc::Blocking>,
    /// (GPIO number, channel, last good value) per input
    channels: Vec<(u8, Channel<'static>, HeldReading), MAX_ADC_CHANNELS>,
}

impl BoardAdc {
    /// Create an ADC with no channels registered
    pub fn new(adc: Adc<'static, adc::Blocking>) -> Self {
        Self {
            adc,
            channels: Vec::new(),
        }
    }

    /// Register a channel under its GPIO number
    pub fn add_channel(&mut self, gpio: u8, channel: Channel<'static>) -> bool {
        self.channels
            .push((gpio, channel, HeldReading::new()))
            .is_ok()
    }
}

impl AnalogPins for BoardAdc {
    fn read_pin(&mut self, pin: u8) -> u16 {
        let Some((_, channel, held)) = self.channels.iter_mut().find(|(gpio, _, _)| *gpio == pin)
        else {
            warn!("ADC read on unregistered GPIO{}", pin);
            return 0;
        };

        let reading = self.adc.blocking_read(channel);
        if reading.is_err() {
            warn!("ADC conversion failed on GPIO{}, repeating last value", pin);
        }
        held.update(reading)
    }
}
