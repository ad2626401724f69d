//! `embedded-hal` adapters
//!
//! Bridge board support crates that implement `embedded-hal` 1.0 to the
//! capability traits the drivers use.

pub mod gpio;
pub mod i2c;

pub use gpio::HalInput;
pub use i2c::HalI2c;
