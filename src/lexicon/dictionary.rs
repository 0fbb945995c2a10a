//! Real-word checking

use crate::core::normalize;
use rustc_hash::FxHashSet;

/// Capability to decide whether a word is real English
///
/// Implementations must be case-insensitive and must treat empty or
/// whitespace-only input as not a word.
pub trait SpellChecker {
    fn is_real_word(&self, word: &str) -> bool;
}

/// Set-backed English dictionary
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any list of words
    ///
    /// Words are normalized before insertion; blanks are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        dictionary.extend(words);
        dictionary
    }

    /// Add more words
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty()),
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for Dictionary {
    fn is_real_word(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty() && self.words.contains(&word)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_real_word(&self, word: &str) -> bool {
        (**self).is_real_word(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["silk", "Worm", "  milk  ", ""])
    }

    #[test]
    fn recognizes_known_words() {
        let dict = dictionary();
        assert!(dict.is_real_word("silk"));
        assert!(dict.is_real_word("worm"));
        assert!(dict.is_real_word("milk"));
        assert!(!dict.is_real_word("klis"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dict = dictionary();
        assert!(dict.is_real_word("SILK"));
        assert!(dict.is_real_word("wOrM"));
    }

    #[test]
    fn blank_input_is_not_a_word() {
        let dict = dictionary();
        assert!(!dict.is_real_word(""));
        assert!(!dict.is_real_word("   "));
        assert!(!dict.is_real_word("\t\n"));
    }

    #[test]
    fn blanks_are_not_inserted() {
        assert_eq!(dictionary().len(), 3);
        assert!(Dictionary::default().is_empty());
    }

    #[test]
    fn extend_adds_words() {
        let mut dict = dictionary();
        dict.extend(["silkworm"]);
        assert!(dict.is_real_word("silkworm"));
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn reference_delegates() {
        let dict = dictionary();
        let by_ref: &Dictionary = &dict;
        assert!(SpellChecker::is_real_word(&by_ref, "silk"));
    }
}
