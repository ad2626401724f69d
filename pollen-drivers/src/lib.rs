//! Leaf driver implementations
//!
//! This crate provides concrete implementations of the
//! [`Driver`](pollen_core::Driver) trait for common input sources:
//!
//! - Analog lines (raw converter values)
//! - Digital lines (buttons, switches, contacts)
//! - Sensirion SHT3x temperature/humidity sensor over I2C
//!
//! plus adapters from `embedded-hal` 1.0 to the `pollen-hal` traits.

#![no_std]
#![deny(unsafe_code)]

pub mod adapter;
pub mod sensor;

pub use sensor::{AnalogPinDriver, DigitalPinDriver, Sht3xDriver};
