//! Formatting utilities for terminal output

use crate::core::{LetterPool, letter_count};

/// Circled number for a letter count
///
/// Uses the enclosed alphanumerics block for 1 to 20 and falls back to a
/// parenthesized number beyond that.
#[must_use]
pub fn count_badge(count: usize) -> String {
    match count {
        1..=20 => {
            // U+2460 is CIRCLED DIGIT ONE; the block is contiguous to 20
            let offset = u32::try_from(count - 1).unwrap_or(0);
            char::from_u32(0x2460 + offset).map_or_else(|| format!("({count})"), String::from)
        }
        _ => format!("({count})"),
    }
}

/// A used word prefixed with its letter-count badge
#[must_use]
pub fn word_with_badge(word: &str) -> String {
    format!("{} {word}", count_badge(letter_count(word)))
}

/// Sorted, upper-cased letters of a pool separated by spaces
#[must_use]
pub fn spaced_letters(pool: &LetterPool) -> String {
    pool.to_string()
        .to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
