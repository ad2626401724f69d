//! Time-gated poller
//!
//! Wraps one driver (usually a composite) and samples it at most once
//! per configured interval, notifying a callback when a cycle reports a
//! change. `update()` is meant to be called from the main control loop
//! as often as possible; between intervals it returns immediately.

use pollen_hal::clock::{elapsed_ms, Clock};

use crate::config::PollerConfig;
use crate::traits::Driver;

/// Default interval between two driver reads
pub const DEFAULT_INTERVAL_MS: u32 = 1000;

/// Result of one `update()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Interval not yet elapsed, driver not read
    Waiting,
    /// Driver read, no new value (or read failed)
    Unchanged,
    /// Driver read and reported a new value; callback fired if set
    Changed,
}

/// Time-gated poller
///
/// Two logical states: idle until more than `interval_ms` has passed
/// since the last attempt, then one sampling cycle. The attempt time is
/// recorded whether or not the read succeeds, so a failing source is
/// retried on the next interval rather than on every tick.
///
/// The first `update()` after construction always samples.
///
/// The callback must not call back into the poller.
pub struct Poller<'a, D, C> {
    driver: D,
    clock: C,
    interval_ms: u32,
    last_attempt_ms: Option<u32>,
    callback: Option<&'a mut dyn FnMut()>,
}

impl<'a, D: Driver, C: Clock> Poller<'a, D, C> {
    /// Create a poller with the default 1 s interval
    pub fn new(driver: D, clock: C) -> Self {
        Self::with_interval(driver, clock, DEFAULT_INTERVAL_MS)
    }

    /// Create a poller with a custom interval
    ///
    /// # Arguments
    /// - `driver`: Driver to sample (owned, or `&mut` to a driver built earlier)
    /// - `clock`: Millisecond clock used for the interval gate
    /// - `interval_ms`: Minimum time between two driver reads
    pub fn with_interval(driver: D, clock: C, interval_ms: u32) -> Self {
        Self {
            driver,
            clock,
            interval_ms,
            last_attempt_ms: None,
            callback: None,
        }
    }

    /// Create a poller from stored configuration
    pub fn with_config(driver: D, clock: C, config: &PollerConfig) -> Self {
        Self::with_interval(driver, clock, config.interval_ms)
    }

    /// Set the change notification callback, replacing any previous one
    pub fn set_callback(&mut self, callback: &'a mut dyn FnMut()) {
        self.callback = Some(callback);
    }

    /// Remove the change notification callback
    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    /// Check if a callback is registered
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Run one poll step
    ///
    /// Reads the driver if the interval has elapsed (wraparound-safe),
    /// and fires the callback at most once if the read reported a change.
    pub fn update(&mut self) -> PollOutcome {
        let now = self.clock.now_ms();

        if let Some(last) = self.last_attempt_ms {
            if elapsed_ms(now, last) <= self.interval_ms {
                return PollOutcome::Waiting;
            }
        }

        self.last_attempt_ms = Some(now);

        if !self.driver.read() {
            #[cfg(feature = "defmt")]
            defmt::trace!("poll at {=u32}ms: no update", now);
            return PollOutcome::Unchanged;
        }

        if let Some(callback) = self.callback.as_deref_mut() {
            callback();
        }

        PollOutcome::Changed
    }

    /// Minimum time between two driver reads
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time of the last sampling attempt, if any
    pub fn last_attempt_ms(&self) -> Option<u32> {
        self.last_attempt_ms
    }

    /// Get access to the wrapped driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get mutable access to the wrapped driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
