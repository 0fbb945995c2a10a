//! Core domain types for the word game
//!
//! Pure value types with no I/O: input normalization, letter multisets,
//! difficulty mode and validation outcomes.

mod mode;
mod verdict;
mod word;

pub use mode::Mode;
pub use verdict::{Rejection, RejectionKind, Verdict};
pub use word::{LetterPool, letter_count, normalize};

/// Root word used when no candidates are available
pub const FALLBACK_ROOT: &str = "silkworm";
