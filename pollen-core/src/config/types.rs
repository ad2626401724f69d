//! Configuration type definitions
//!
//! These types describe an input set: which sources are sampled and how
//! often. Configuration can be stored in flash as postcard-serialized
//! binary data.

use heapless::{String, Vec};

use crate::driver::{MAX_CHILDREN, MIN_CHILDREN};
use crate::scheduler::DEFAULT_INTERVAL_MS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Maximum sensors per input set (one composite)
pub const MAX_SENSORS: usize = MAX_CHILDREN;

/// Default SHT3x address (ADDR pin low)
pub const SHT3X_DEFAULT_ADDRESS: u8 = 0x44;

/// Alternate SHT3x address (ADDR pin high)
pub const SHT3X_ALT_ADDRESS: u8 = 0x45;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Poll interval is zero
    ZeroInterval,
    /// No sensors configured
    NoSensors,
    /// More sensors than one composite can hold
    TooManySensors,
    /// Same pin used by two sensors
    DuplicatePin(u8),
    /// Same bus address used by two sensors
    DuplicateAddress(u8),
    /// Bus address the sensor cannot be strapped to
    InvalidAddress(u8),
    /// Label longer than [`MAX_LABEL_LEN`]
    LabelTooLong,
    /// Serialization failed (buffer too small)
    Serialize,
    /// Stored data is not a valid configuration
    Deserialize,
}

/// Poller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollerConfig {
    /// Minimum time between two driver reads (ms)
    pub interval_ms: u32,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

/// One sampled source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorConfig {
    /// Raw analog line
    AnalogPin {
        /// ADC-capable pin number
        pin: u8,
    },
    /// Digital line (button, switch, contact)
    DigitalPin {
        /// GPIO pin number
        pin: u8,
        /// Pin is active-low
        inverted: bool,
    },
    /// SHT3x temperature/humidity sensor on I2C
    Sht3x {
        /// 7-bit I2C address (0x44 or 0x45)
        address: u8,
    },
}

impl SensorConfig {
    /// Pin used by this sensor, if pin-based
    pub const fn pin(&self) -> Option<u8> {
        match *self {
            SensorConfig::AnalogPin { pin } | SensorConfig::DigitalPin { pin, .. } => Some(pin),
            SensorConfig::Sht3x { .. } => None,
        }
    }

    /// Bus address used by this sensor, if bus-based
    pub const fn address(&self) -> Option<u8> {
        match *self {
            SensorConfig::Sht3x { address } => Some(address),
            _ => None,
        }
    }
}

/// Sensors sampled by the default board layout
const DEFAULT_SENSORS: &[SensorConfig] = &[
    SensorConfig::Sht3x {
        address: SHT3X_DEFAULT_ADDRESS,
    },
    SensorConfig::AnalogPin { pin: 26 },
    SensorConfig::DigitalPin {
        pin: 15,
        inverted: true,
    },
];

/// Complete input set configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputConfig {
    /// Label used in logs
    pub label: String<MAX_LABEL_LEN>,
    /// Scheduler settings
    pub poller: PollerConfig,
    /// Sampled sources
    ///
    /// Boards with a fixed wiring look sources up by kind with the
    /// `find_*` helpers and use the first match of each kind.
    pub sensors: Vec<SensorConfig, MAX_SENSORS>,
}

impl Default for InputConfig {
    fn default() -> Self {
        let mut label = String::new();
        let _ = label.push_str("inputs");
        Self {
            label,
            poller: PollerConfig::default(),
            sensors: DEFAULT_SENSORS.iter().copied().collect(),
        }
    }
}

impl InputConfig {
    /// Create an empty input set
    pub fn new(label: &str, interval_ms: u32) -> Result<Self, ConfigError> {
        let mut config = Self {
            label: String::new(),
            poller: PollerConfig { interval_ms },
            sensors: Vec::new(),
        };
        config
            .label
            .push_str(label)
            .map_err(|_| ConfigError::LabelTooLong)?;
        Ok(config)
    }

    /// Append a sensor
    pub fn add_sensor(&mut self, sensor: SensorConfig) -> Result<(), ConfigError> {
        self.sensors
            .push(sensor)
            .map_err(|_| ConfigError::TooManySensors)
    }

    /// Check the configuration can be turned into a driver graph
    ///
    /// A single sensor is polled directly; two or more are grouped in a
    /// composite, which holds at most [`MAX_SENSORS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poller.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if self.sensors.is_empty() {
            return Err(ConfigError::NoSensors);
        }

        for (i, sensor) in self.sensors.iter().enumerate() {
            if let SensorConfig::Sht3x { address } = *sensor {
                if address != SHT3X_DEFAULT_ADDRESS && address != SHT3X_ALT_ADDRESS {
                    return Err(ConfigError::InvalidAddress(address));
                }
            }
            for other in &self.sensors[i + 1..] {
                if let (Some(a), Some(b)) = (sensor.pin(), other.pin()) {
                    if a == b {
                        return Err(ConfigError::DuplicatePin(a));
                    }
                }
                if let (Some(a), Some(b)) = (sensor.address(), other.address()) {
                    if a == b {
                        return Err(ConfigError::DuplicateAddress(a));
                    }
                }
            }
        }

        Ok(())
    }

    /// Whether the sensors need a composite driver
    pub fn is_composite(&self) -> bool {
        self.sensors.len() >= MIN_CHILDREN
    }

    /// Find the first analog pin sensor
    pub fn find_analog_pin(&self) -> Option<u8> {
        self.sensors.iter().find_map(|s| match *s {
            SensorConfig::AnalogPin { pin } => Some(pin),
            _ => None,
        })
    }

    /// Find the first digital pin sensor, returning `(pin, inverted)`
    pub fn find_digital_pin(&self) -> Option<(u8, bool)> {
        self.sensors.iter().find_map(|s| match *s {
            SensorConfig::DigitalPin { pin, inverted } => Some((pin, inverted)),
            _ => None,
        })
    }

    /// Find the first SHT3x sensor address
    pub fn find_sht3x(&self) -> Option<u8> {
        self.sensors.iter().find_map(|s| match *s {
            SensorConfig::Sht3x { address } => Some(address),
            _ => None,
        })
    }

    /// Serialize into `buf`, returning the used part
    #[cfg(feature = "serde")]
    pub fn to_slice<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize and validate a stored configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = InputConfig::default();
        assert_eq!(config.poller.interval_ms, 1000);
        assert_eq!(config.sensors.len(), 3);
        assert!(config.is_composite());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_interval() {
        let mut config = InputConfig::new("door", 0).unwrap();
        config.add_sensor(SensorConfig::AnalogPin { pin: 26 }).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_no_sensors() {
        let config = InputConfig::new("empty", 500).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::NoSensors));
    }

    #[test]
    fn test_single_sensor_is_not_composite() {
        let mut config = InputConfig::new("light", 500).unwrap();
        config.add_sensor(SensorConfig::AnalogPin { pin: 27 }).unwrap();
        assert_eq!(config.validate(), Ok(()));
        assert!(!config.is_composite());
    }

    #[test]
    fn test_too_many_sensors() {
        let mut config = InputConfig::new("panel", 500).unwrap();
        for pin in 0..MAX_SENSORS as u8 {
            config.add_sensor(SensorConfig::AnalogPin { pin }).unwrap();
        }
        assert_eq!(
            config.add_sensor(SensorConfig::AnalogPin { pin: 99 }),
            Err(ConfigError::TooManySensors)
        );
    }

    #[test]
    fn test_duplicates() {
        let mut config = InputConfig::new("dup", 500).unwrap();
        config.add_sensor(SensorConfig::AnalogPin { pin: 26 }).unwrap();
        config
            .add_sensor(SensorConfig::DigitalPin {
                pin: 26,
                inverted: false,
            })
            .unwrap();
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin(26)));

        let mut config = InputConfig::new("dup", 500).unwrap();
        config.add_sensor(SensorConfig::Sht3x { address: 0x45 }).unwrap();
        config.add_sensor(SensorConfig::Sht3x { address: 0x45 }).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::DuplicateAddress(0x45)));
    }

    #[test]
    fn test_invalid_sht3x_address() {
        let mut config = InputConfig::new("climate", 500).unwrap();
        config.add_sensor(SensorConfig::Sht3x { address: 0x45 }).unwrap();
        assert_eq!(config.validate(), Ok(()));

        config.add_sensor(SensorConfig::Sht3x { address: 0x40 }).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::InvalidAddress(0x40)));
    }

    #[test]
    fn test_label_too_long() {
        let result = InputConfig::new("a-label-far-too-long-to-fit", 500);
        assert_eq!(result, Err(ConfigError::LabelTooLong));
    }

    #[test]
    fn test_find_helpers() {
        let config = InputConfig::default();
        assert_eq!(config.find_sht3x(), Some(SHT3X_DEFAULT_ADDRESS));
        assert_eq!(config.find_analog_pin(), Some(26));
        assert_eq!(config.find_digital_pin(), Some((15, true)));
    }

    #[test]
    fn test_find_helpers_take_first_of_kind() {
        let mut config = InputConfig::new("panel", 500).unwrap();
        config
            .add_sensor(SensorConfig::DigitalPin {
                pin: 14,
                inverted: false,
            })
            .unwrap();
        config.add_sensor(SensorConfig::AnalogPin { pin: 27 }).unwrap();
        config.add_sensor(SensorConfig::AnalogPin { pin: 26 }).unwrap();
        config.add_sensor(SensorConfig::Sht3x { address: 0x45 }).unwrap();
        assert_eq!(config.validate(), Ok(()));

        // Order between kinds does not matter, the first of each kind wins
        assert_eq!(config.find_analog_pin(), Some(27));
        assert_eq!(config.find_digital_pin(), Some((14, false)));
        assert_eq!(config.find_sht3x(), Some(0x45));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_stored_config() {
        let config = InputConfig::default();
        let mut buf = [0u8; 64];
        let used = config.to_slice(&mut buf).unwrap().len();

        let loaded = InputConfig::from_bytes(&buf[..used]).unwrap();
        assert_eq!(loaded, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_stored_config_rejects_garbage() {
        assert_eq!(
            InputConfig::from_bytes(&[0xFF, 0xFF, 0xFF]),
            Err(ConfigError::Deserialize)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_buffer_too_small() {
        let config = InputConfig::default();
        let mut buf = [0u8; 2];
        assert_eq!(config.to_slice(&mut buf).err(), Some(ConfigError::Serialize));
    }
}
