//! Polling scheduler
//!
//! Decides when the driver graph is sampled and who gets told about it.

pub mod poller;

pub use poller::{PollOutcome, Poller, DEFAULT_INTERVAL_MS};
