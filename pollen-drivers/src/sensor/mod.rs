//! Leaf input drivers
//!
//! Each driver samples one source and feeds an aggregator it owns.

pub mod analog;
pub mod digital;
pub mod sht3x;

pub use analog::AnalogPinDriver;
pub use digital::DigitalPinDriver;
pub use sht3x::{Sht3xDriver, Sht3xError};
