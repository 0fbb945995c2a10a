//! Root word candidates and the real-word check
//!
//! Provides embedded word lists compiled into the binary, with optional
//! overrides loaded from files at startup.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, SpellChecker};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

use log::info;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error loading a word list
#[derive(Debug)]
pub enum LexiconError {
    Io { path: PathBuf, source: io::Error },
    Empty(PathBuf),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Could not load word list {}: {source}", path.display())
            }
            Self::Empty(path) => write!(f, "Word list {} contains no words", path.display()),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty(_) => None,
        }
    }
}

/// Root word candidates paired with a spell checker
pub struct Lexicon<C: SpellChecker = Dictionary> {
    roots: Vec<String>,
    checker: C,
}

impl Lexicon<Dictionary> {
    /// Lexicon built from the embedded word lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(
            loader::words_from_slice(START_WORDS),
            Dictionary::from_words(DICTIONARY),
        )
    }

    /// Lexicon from explicit root candidates and dictionary
    ///
    /// Root candidates are added to the dictionary so that every root word is
    /// itself a real word.
    #[must_use]
    pub fn from_lists(roots: Vec<String>, mut dictionary: Dictionary) -> Self {
        dictionary.extend(&roots);
        info!(
            "Lexicon ready: {} root candidates, {} dictionary words",
            roots.len(),
            dictionary.len()
        );
        Self {
            roots,
            checker: dictionary,
        }
    }

    /// Build a lexicon, replacing embedded lists with files where given
    ///
    /// # Errors
    ///
    /// Returns `LexiconError` if a given file is missing, unreadable or empty.
    pub fn load(
        wordlist: Option<&std::path::Path>,
        dictionary: Option<&std::path::Path>,
    ) -> Result<Self, LexiconError> {
        let roots = match wordlist {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(START_WORDS),
        };
        let dictionary = match dictionary {
            Some(path) => Dictionary::from_words(loader::load_from_file(path)?),
            None => Dictionary::from_words(DICTIONARY),
        };
        Ok(Self::from_lists(roots, dictionary))
    }
}

impl<C: SpellChecker> Lexicon<C> {
    /// Lexicon with a custom spell checker
    #[must_use]
    pub const fn with_checker(roots: Vec<String>, checker: C) -> Self {
        Self { roots, checker }
    }

    /// Candidate root words, in file order
    #[must_use]
    pub fn root_candidates(&self) -> &[String] {
        &self.roots
    }

    #[must_use]
    pub const fn checker(&self) -> &C {
        &self.checker
    }

    /// Whether `word` is recognized as real English
    #[must_use]
    pub fn is_real_word(&self, word: &str) -> bool {
        self.checker.is_real_word(word)
    }
}
