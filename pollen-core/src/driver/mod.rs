//! Driver composition
//!
//! Leaf drivers live in `pollen-drivers`; this module provides the
//! hardware-independent ways of combining them.

pub mod composite;

pub use composite::{CompositeDriver, CompositeError, MAX_CHILDREN, MIN_CHILDREN};
