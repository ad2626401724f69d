//! Board-agnostic polling core
//!
//! This crate contains everything that does not depend on specific
//! hardware:
//!
//! - Driver and aggregator traits
//! - Stock aggregation policies (keep last, accumulate, moving average)
//! - Composite driver grouping several sources under one driver
//! - Time-gated poller with change notification
//! - Input set configuration types
//!
//! Everything runs in the caller's control flow: no allocation, no
//! locking, no blocking beyond what a driver's own source needs.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod driver;
pub mod scheduler;
pub mod traits;

pub use driver::CompositeDriver;
pub use scheduler::{PollOutcome, Poller};
pub use traits::{Aggregator, Driver};
