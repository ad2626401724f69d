//! Sensirion SHT3x temperature/humidity sensor
//!
//! Dual-channel I2C sensor. Each cycle issues a single-shot measurement
//! with clock stretching (the sensor holds SCL until the result is ready,
//! so no delay is needed between command and read), then reads six bytes:
//!
//! ```text
//! ┌────────┬────────┬─────┬────────┬────────┬─────┐
//! │ T msb  │ T lsb  │ CRC │ RH msb │ RH lsb │ CRC │
//! └────────┴────────┴─────┴────────┴────────┴─────┘
//! ```
//!
//! Conversion formulas (datasheet section 4.13), in integer arithmetic
//! with the multiplication done before the division:
//! - T [°C] = -45 + 175 × raw / 65535
//! - RH [%] = 100 × raw / 65535

use pollen_core::traits::{Aggregator, Driver};
use pollen_hal::I2cBus;

/// Default address (ADDR pin low)
pub const DEFAULT_ADDRESS: u8 = 0x44;

/// Alternate address (ADDR pin high)
pub const ALT_ADDRESS: u8 = 0x45;

/// Single shot, high repeatability, clock stretching enabled
pub const CMD_MEASURE_HIGH_STRETCH: [u8; 2] = [0x2C, 0x06];

/// Response length for one measurement
pub const RESPONSE_LEN: usize = 6;

/// Full-scale raw value
const RAW_MAX: u32 = 65535;

/// SHT3x communication errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sht3xError<E> {
    /// Bus transaction failed (non-zero status)
    Bus(E),
    /// Checksum of a response word did not match
    CrcMismatch,
}

impl<E> Sht3xError<E> {
    /// Short description for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Sht3xError::Bus(_) => "bus",
            Sht3xError::CrcMismatch => "crc",
        }
    }
}

/// Raw measurement words as sent by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawMeasurement {
    /// Raw temperature word
    pub temperature: u16,
    /// Raw relative humidity word
    pub humidity: u16,
}

/// CRC-8 as used by Sensirion sensors
///
/// Polynomial 0x31 (x^8 + x^5 + x^4 + 1), initial value 0xFF, no
/// reflection, no final XOR.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0xFFu8;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ 0x31;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Parse a measurement response
///
/// Both words are big-endian and each is followed by its CRC.
pub fn parse_response<E>(response: &[u8; RESPONSE_LEN]) -> Result<RawMeasurement, Sht3xError<E>> {
    if crc8(&response[0..2]) != response[2] || crc8(&response[3..5]) != response[5] {
        return Err(Sht3xError::CrcMismatch);
    }

    Ok(RawMeasurement {
        temperature: u16::from_be_bytes([response[0], response[1]]),
        humidity: u16::from_be_bytes([response[3], response[4]]),
    })
}

/// Convert a raw temperature word to whole degrees Celsius
pub fn temperature_c(raw: u16) -> i16 {
    ((raw as i32 * 175) / RAW_MAX as i32 - 45) as i16
}

/// Convert a raw humidity word to whole percent relative humidity
pub fn humidity_pct(raw: u16) -> u16 {
    (raw as u32 * 100 / RAW_MAX) as u16
}

/// SHT3x input driver
///
/// Owns one aggregator per channel. A failed command write, a failed
/// read or a checksum mismatch aborts the cycle: `read()` returns false
/// and neither aggregator is touched.
pub struct Sht3xDriver<B, T, H> {
    bus: B,
    address: u8,
    temperature: T,
    humidity: H,
}

impl<B, T, H> Sht3xDriver<B, T, H>
where
    B: I2cBus,
    T: Aggregator<i16>,
    H: Aggregator<u16>,
{
    /// Create a new SHT3x driver
    ///
    /// # Arguments
    /// - `bus`: I2C bus (a `&RefCell` when shared with other devices)
    /// - `address`: [`DEFAULT_ADDRESS`] or [`ALT_ADDRESS`]
    /// - `temperature`: Aggregator for temperature (°C)
    /// - `humidity`: Aggregator for relative humidity (%)
    pub fn new(bus: B, address: u8, temperature: T, humidity: H) -> Self {
        Self {
            bus,
            address,
            temperature,
            humidity,
        }
    }

    /// Run one measurement transaction without touching the aggregators
    pub fn measure(&mut self) -> Result<RawMeasurement, Sht3xError<B::Error>> {
        self.bus
            .write(self.address, &CMD_MEASURE_HIGH_STRETCH)
            .map_err(Sht3xError::Bus)?;

        let mut response = [0u8; RESPONSE_LEN];
        self.bus
            .read(self.address, &mut response)
            .map_err(Sht3xError::Bus)?;

        parse_response(&response)
    }

    /// Sensor address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Aggregated temperature (°C)
    pub fn temperature_c(&self) -> i16 {
        self.temperature.get()
    }

    /// Aggregated relative humidity (%)
    pub fn humidity_pct(&self) -> u16 {
        self.humidity.get()
    }

    /// Get access to the temperature aggregator
    pub fn temperature(&self) -> &T {
        &self.temperature
    }

    /// Get access to the humidity aggregator
    pub fn humidity(&self) -> &H {
        &self.humidity
    }
}

impl<B, T, H> Driver for Sht3xDriver<B, T, H>
where
    B: I2cBus,
    T: Aggregator<i16>,
    H: Aggregator<u16>,
{
    fn read(&mut self) -> bool {
        match self.measure() {
            Ok(raw) => {
                self.temperature.add(temperature_c(raw.temperature));
                self.humidity.add(humidity_pct(raw.humidity));
                true
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("SHT3x {=u8:#x}: {=str} error", self.address, _e.kind());
                false
            }
        }
    }
}
