//! Core capability traits
//!
//! These traits define the interface between the polling scheduler,
//! the drivers it invokes and the aggregators drivers feed.

pub mod aggregator;
pub mod driver;

pub use aggregator::Aggregator;
pub use driver::Driver;
