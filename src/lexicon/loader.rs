//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::LexiconError;
use crate::core::normalize;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse a newline-delimited word list
///
/// Entries are normalized; blank lines are skipped.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file cannot be read and
/// `LexiconError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::lexicon::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(LexiconError::Empty(path.to_path_buf()));
    }

    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::lexicon::loader::words_from_slice;
/// use word_scramble::lexicon::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| normalize(s))
        .filter(|word| !word.is_empty())
        .collect()
}
