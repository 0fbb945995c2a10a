//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckSummary, run_check};
pub use play::{PlayInput, run_play};
