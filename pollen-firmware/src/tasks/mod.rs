//! Embassy async tasks

pub mod input;

pub use input::{input_task, InputParts};
