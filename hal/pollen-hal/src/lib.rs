//! Pollen Hardware Abstraction Layer
//!
//! This crate defines the hardware-access capabilities the polling core
//! depends on. Chip-specific code (or test fakes) implements them, so the
//! same drivers and scheduler run on any board and on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Poller (pollen-core)                   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Drivers (pollen-drivers)               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pollen-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ board support │       │  test fakes   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`clock::Clock`] - Monotonic millisecond clock
//! - [`adc::AnalogPins`] - Analog line sampling
//! - [`gpio::InputPin`] - Digital input
//! - [`i2c::I2cBus`] - I2C bus operations

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use adc::{AnalogPins, HeldReading};
pub use clock::Clock;
pub use gpio::InputPin;
pub use i2c::{I2cBus, I2cConfig, I2cError};
