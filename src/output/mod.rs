//! Terminal output formatting
//!
//! Display utilities for verdicts, rounds and accepted words.

pub mod display;
pub mod formatters;

pub use display::{write_round_banner, write_used_words, write_verdict};
