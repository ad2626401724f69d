//! Sample aggregation trait

use core::cell::RefCell;

/// Sample aggregator
///
/// Holds a running value built from raw samples. Leaf drivers own one
/// aggregator per measured channel and feed it on every successful read.
/// The policy (keep last, sum, average, ...) is up to the implementation.
pub trait Aggregator<T> {
    /// Return to the initial state
    fn reset(&mut self);

    /// Feed a new sample, returning the updated aggregate
    fn add(&mut self, value: T) -> T;

    /// Current aggregate
    fn get(&self) -> T;
}

/// Shared aggregator
///
/// Once the driver graph is handed to a poller, the drivers are borrowed
/// for as long as the poller lives. Keeping the aggregator in a `RefCell`
/// outside the driver lets application code read values in the meantime.
impl<T, A: Aggregator<T>> Aggregator<T> for &RefCell<A> {
    fn reset(&mut self) {
        self.borrow_mut().reset();
    }

    fn add(&mut self, value: T) -> T {
        self.borrow_mut().add(value)
    }

    fn get(&self) -> T {
        self.borrow().get()
    }
}
