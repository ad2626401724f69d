//! Composite driver
//!
//! Groups 2 to 8 heterogeneous child drivers behind one [`Driver`], so a
//! single poller can sample a whole sensor set each cycle.

use heapless::Vec;

use crate::traits::Driver;

/// Fewest children a composite accepts
pub const MIN_CHILDREN: usize = 2;

/// Most children a composite accepts
pub const MAX_CHILDREN: usize = 8;

/// Errors building a composite driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompositeError {
    /// Number of supplied children differs from the declared capacity
    CountMismatch {
        /// Declared capacity (`N`)
        expected: usize,
        /// Children actually supplied
        actual: usize,
    },
}

/// Driver made of `N` child drivers
///
/// Reports a change if any child reports one. Every child is sampled on
/// every cycle, even after an earlier child already reported a change,
/// so all channel aggregators stay fresh.
///
/// `N` must be between [`MIN_CHILDREN`] and [`MAX_CHILDREN`]; other
/// values fail to compile.
///
/// ```
/// use pollen_core::{CompositeDriver, Driver};
///
/// struct Leaf;
///
/// impl Driver for Leaf {
///     fn read(&mut self) -> bool {
///         true
///     }
/// }
///
/// let (mut a, mut b) = (Leaf, Leaf);
/// let mut composite = CompositeDriver::new([&mut a, &mut b]);
/// assert!(composite.read());
/// ```
///
/// A single child is rejected:
///
/// ```compile_fail
/// use pollen_core::{CompositeDriver, Driver};
///
/// struct Leaf;
///
/// impl Driver for Leaf {
///     fn read(&mut self) -> bool {
///         true
///     }
/// }
///
/// let mut a = Leaf;
/// let _ = CompositeDriver::<1>::new([&mut a]);
/// ```
///
/// So is a capacity above the limit, through either constructor:
///
/// ```compile_fail
/// use pollen_core::{CompositeDriver, Driver};
///
/// let _ = CompositeDriver::<9>::try_from_iter(core::iter::empty::<&mut dyn Driver>());
/// ```
pub struct CompositeDriver<'a, const N: usize> {
    /// Always holds exactly `N` children
    children: Vec<&'a mut dyn Driver, N>,
}

impl<'a, const N: usize> CompositeDriver<'a, N> {
    const ARITY_OK: () = assert!(
        N >= MIN_CHILDREN && N <= MAX_CHILDREN,
        "composite driver needs between 2 and 8 children"
    );

    /// Create a composite from exactly `N` children
    pub fn new(children: [&'a mut dyn Driver; N]) -> Self {
        let () = Self::ARITY_OK;
        let mut slots = Vec::new();
        for child in children {
            // Capacity is N, cannot overflow
            let _ = slots.push(child);
        }
        Self { children: slots }
    }

    /// Create a composite from a sequence of children
    ///
    /// Fails unless the sequence yields exactly `N` children.
    pub fn try_from_iter<I>(children: I) -> Result<Self, CompositeError>
    where
        I: IntoIterator<Item = &'a mut dyn Driver>,
    {
        let () = Self::ARITY_OK;

        let mut slots: Vec<&'a mut dyn Driver, N> = Vec::new();
        let mut actual = 0;
        for child in children {
            actual += 1;
            // Keep counting past capacity so the error reports the real count
            let _ = slots.push(child);
        }

        if actual != N {
            #[cfg(feature = "defmt")]
            defmt::warn!("composite expects {} children, got {}", N, actual);
            return Err(CompositeError::CountMismatch {
                expected: N,
                actual,
            });
        }

        Ok(Self { children: slots })
    }

    /// Number of children
    pub const fn size(&self) -> usize {
        N
    }
}

impl<const N: usize> Driver for CompositeDriver<'_, N> {
    fn read(&mut self) -> bool {
        let mut changed = false;
        for child in self.children.iter_mut() {
            // Non-short-circuit: every child must be sampled
            changed |= child.read();
        }
        changed
    }
}
