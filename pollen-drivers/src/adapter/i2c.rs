//! `embedded-hal` I2C adapter

use embedded_hal::i2c::{ErrorKind, I2c, NoAcknowledgeSource};
use pollen_hal::{I2cBus, I2cError};

/// Adapts any blocking `embedded_hal::i2c::I2c` bus to [`I2cBus`]
///
/// Bus errors are folded into [`I2cError`] status codes.
pub struct HalI2c<I> {
    inner: I,
}

impl<I: I2c> HalI2c<I> {
    /// Wrap a bus
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Release the wrapped bus
    pub fn into_inner(self) -> I {
        self.inner
    }
}

/// Map an `embedded-hal` error to its transaction status
pub fn map_error<E: embedded_hal::i2c::Error>(error: E) -> I2cError {
    match error.kind() {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => I2cError::AddressNack,
        ErrorKind::NoAcknowledge(_) => I2cError::DataNack,
        ErrorKind::Overrun => I2cError::Overrun,
        _ => I2cError::Other,
    }
}

impl<I: I2c> I2cBus for HalI2c<I> {
    type Error = I2cError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cError> {
        self.inner.write(address, data).map_err(map_error)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cError> {
        self.inner.read(address, buf).map_err(map_error)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cError> {
        self.inner
            .write_read(address, write_data, read_buf)
            .map_err(map_error)
    }
}
