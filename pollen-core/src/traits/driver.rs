//! Input driver trait

/// Input driver
///
/// A driver samples one physical or logical source. Implementations
/// include single-line readers, bus sensors and composites of other
/// drivers.
pub trait Driver {
    /// Sample the source once
    ///
    /// Returns `true` if a new value was obtained (and, for leaf drivers,
    /// forwarded to the attached aggregator). A communication failure
    /// returns `false`: no update this cycle, not a fatal condition.
    fn read(&mut self) -> bool;
}

/// Drivers are usually built once at startup and referenced by the
/// poller or a composite, so a mutable borrow is a driver too.
impl<D: Driver + ?Sized> Driver for &mut D {
    fn read(&mut self) -> bool {
        (**self).read()
    }
}
