pub mod core;
pub mod gui;

pub use crate::core::GapfillError;
