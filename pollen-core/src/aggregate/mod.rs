//! Stock aggregation policies
//!
//! Ready-made [`Aggregator`](crate::traits::Aggregator) implementations:
//!
//! - [`KeepLast`] - the most recent sample
//! - [`Accumulate`] - running sum of all samples since reset
//! - [`Average`] - moving average over the last `N` samples

pub mod accumulate;
pub mod average;
pub mod keep_last;

pub use accumulate::Accumulate;
pub use average::Average;
pub use keep_last::KeepLast;

/// Integer sample types usable with the arithmetic aggregators
pub trait Sample: Copy + Default {
    /// Addition that wraps at the type's bounds
    fn wrapping_add(self, other: Self) -> Self;

    /// Widen to `i64` for overflow-free intermediate sums
    fn widen(self) -> i64;

    /// Narrow back from `i64`
    ///
    /// Only called with values inside the type's range (averages of
    /// in-range samples).
    fn narrow(value: i64) -> Self;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn wrapping_add(self, other: Self) -> Self {
                    <$t>::wrapping_add(self, other)
                }

                #[inline]
                fn widen(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn narrow(value: i64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_sample!(u8, u16, u32, i8, i16, i32);
