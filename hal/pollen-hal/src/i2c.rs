//! I2C bus abstractions
//!
//! Provides traits for I2C master operations that can be implemented
//! by chip-specific HALs.

use core::cell::RefCell;

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices. Every call is one complete, synchronous
/// transaction; an `Err` means the transaction did not complete.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into (its length is the byte count requested)
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// This is commonly used to write a register address then read data.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<B: I2cBus + ?Sized> I2cBus for &mut B {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).write_read(address, write_data, read_buf)
    }
}

/// Shared bus
///
/// Several sensors usually sit on one bus. All of them are sampled from
/// the same control flow, so a `RefCell` is enough to share it.
impl<B: I2cBus> I2cBus for &RefCell<B> {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.borrow_mut().write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.borrow_mut().read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.borrow_mut().write_read(address, write_data, read_buf)
    }
}

/// Transaction failure
///
/// Discriminants match the status codes returned by Arduino-style
/// `endTransmission()`, where 0 means success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum I2cError {
    /// Data too long to fit in transmit buffer
    Overrun = 1,
    /// NACK received on transmit of address
    AddressNack = 2,
    /// NACK received on transmit of data
    DataNack = 3,
    /// Other error (bus error, arbitration lost)
    Other = 4,
    /// Timeout
    Timeout = 5,
}

impl I2cError {
    /// Convert a transaction status code into a result
    ///
    /// Unknown non-zero codes map to [`I2cError::Other`].
    pub const fn check(status: u8) -> Result<(), I2cError> {
        match status {
            0 => Ok(()),
            1 => Err(I2cError::Overrun),
            2 => Err(I2cError::AddressNack),
            3 => Err(I2cError::DataNack),
            5 => Err(I2cError::Timeout),
            _ => Err(I2cError::Other),
        }
    }

    /// Status code for this error (always non-zero)
    pub const fn status(self) -> u8 {
        self as u8
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(I2cError::check(0), Ok(()));
        assert_eq!(I2cError::check(2), Err(I2cError::AddressNack));
        assert_eq!(I2cError::check(5), Err(I2cError::Timeout));
        assert_eq!(I2cError::check(200), Err(I2cError::Other));

        assert_eq!(I2cError::DataNack.status(), 3);
    }

    #[test]
    fn test_default_is_standard_mode() {
        assert_eq!(I2cConfig::default(), I2cConfig::STANDARD);
        assert_eq!(I2cConfig::STANDARD.frequency, 100_000);
    }

    struct CountingBus {
        writes: u8,
    }

    impl I2cBus for CountingBus {
        type Error = I2cError;

        fn write(&mut self, _address: u8, _data: &[u8]) -> Result<(), I2cError> {
            self.writes += 1;
            Ok(())
        }

        fn read(&mut self, _address: u8, buf: &mut [u8]) -> Result<(), I2cError> {
            buf.fill(0xAB);
            Ok(())
        }

        fn write_read(&mut self, address: u8, data: &[u8], buf: &mut [u8]) -> Result<(), I2cError> {
            self.write(address, data)?;
            self.read(address, buf)
        }
    }

    #[test]
    fn test_shared_bus() {
        let bus = RefCell::new(CountingBus { writes: 0 });
        let mut first = &bus;
        let mut second = &bus;

        first.write(0x44, &[0x2C, 0x06]).unwrap();
        let mut buf = [0u8; 2];
        second.write_read(0x45, &[0x00], &mut buf).unwrap();

        assert_eq!(buf, [0xAB, 0xAB]);
        assert_eq!(bus.borrow().writes, 2);
    }
}
