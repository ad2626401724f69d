//! Monotonic millisecond clock

/// Monotonic millisecond clock
///
/// The counter is non-decreasing but wraps around at `u32::MAX`
/// (about 49.7 days). Consumers must compare timestamps with
/// [`elapsed_ms`] (or `wrapping_sub`), never with `<` / `>` directly.
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed from `since` to `now`, tolerant of counter wraparound
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
