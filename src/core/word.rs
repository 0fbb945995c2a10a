//! Candidate word normalization and letter multisets
//!
//! A `LetterPool` stores how many times each letter occurs in a root word so a
//! candidate can be checked for derivability without rescanning the root.

use rustc_hash::FxHashMap;
use std::fmt;

/// Normalize raw player input
///
/// Trims surrounding whitespace and lower-cases the rest. Every comparison in
/// the game runs on this form.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  SiLk \n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of letters in a normalized word
///
/// Counts Unicode scalar values, not bytes.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Multiset of the letters in a word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterPool {
    /// Build a pool from every character of `word`
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        let mut total = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Total number of letters in the pool
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Each letter in the pool can be used at most once, so "silkworms" cannot
    /// be spelled from "silkworm" (only one `s` available).
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(pool.can_spell("worm"));
    /// assert!(!pool.can_spell("silkworms"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in word.chars() {
            match remaining.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(&char, &usize)> = self.counts.iter().collect();
        letters.sort_unstable();
        for (ch, &count) in letters {
            for _ in 0..count {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("Silk"), "silk");
        assert_eq!(normalize("\tWORM  "), "worm");
        assert_eq!(normalize(" \n "), "");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" Silk Worm "), "silk worm");
    }

    #[test]
    fn letter_count_counts_chars_not_bytes() {
        assert_eq!(letter_count("café"), 4);
        assert_eq!(letter_count(""), 0);
    }

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::new("balloon");
        assert_eq!(pool.len(), 7);
        assert_eq!(format!("{pool}"), "abllnoo");
    }

    #[test]
    fn pool_spells_subsets() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("milk"));
        assert!(pool.can_spell("silkworm"));
        assert!(pool.can_spell(""));
    }

    #[test]
    fn pool_rejects_reused_letters() {
        let pool = LetterPool::new("silkworm");
        assert!(!pool.can_spell("silkworms"));
        assert!(!pool.can_spell("mill"));
    }

    #[test]
    fn pool_rejects_missing_letters() {
        let pool = LetterPool::new("silkworm");
        assert!(!pool.can_spell("silky"));
    }

    #[test]
    fn pool_allows_duplicates_present_in_root() {
        let pool = LetterPool::new("balloon");
        assert!(pool.can_spell("loon"));
        assert!(pool.can_spell("ball"));
        assert!(!pool.can_spell("balls"));
    }

    #[test]
    fn empty_pool_spells_nothing_but_empty() {
        let pool = LetterPool::new("");
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }

    #[test]
    fn pool_display_is_sorted() {
        let pool = LetterPool::new("worm");
        assert_eq!(format!("{pool}"), "morw");
    }
}
