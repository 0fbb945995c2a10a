//! Submission validation pipeline
//!
//! Four independent rules evaluated in a fixed order. The first rule that
//! fails decides the rejection; later rules are not consulted.
//!
//! 1. length (mode dependent)
//! 2. not already used
//! 3. spellable from the root word's letters
//! 4. a real word

use crate::core::{LetterPool, Mode, Rejection, Verdict, letter_count};
use crate::lexicon::SpellChecker;

/// Read-only view of the state a submission is checked against
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub root_word: &'a str,
    pub used_words: &'a [String],
    pub mode: Mode,
}

/// Reject words that are not longer than the mode's floor
///
/// # Errors
///
/// Returns a `TooShort` rejection.
pub fn check_length(word: &str, mode: Mode) -> Result<(), Rejection> {
    if letter_count(word) > mode.length_floor() {
        Ok(())
    } else {
        Err(Rejection::too_short())
    }
}

/// Reject words already accepted this round
///
/// # Errors
///
/// Returns an `AlreadyUsed` rejection.
pub fn check_original(word: &str, used_words: &[String]) -> Result<(), Rejection> {
    if used_words.iter().any(|used| used == word) {
        Err(Rejection::already_used())
    } else {
        Ok(())
    }
}

/// Reject words that need letters the root word does not have
///
/// # Errors
///
/// Returns a `NotPossible` rejection.
pub fn check_possible(word: &str, root_word: &str) -> Result<(), Rejection> {
    if LetterPool::new(root_word).can_spell(word) {
        Ok(())
    } else {
        Err(Rejection::not_possible(word, root_word))
    }
}

/// Reject words the spell checker does not recognize
///
/// # Errors
///
/// Returns a `NotAWord` rejection.
pub fn check_real<C: SpellChecker + ?Sized>(word: &str, checker: &C) -> Result<(), Rejection> {
    if checker.is_real_word(word) {
        Ok(())
    } else {
        Err(Rejection::not_a_word())
    }
}

/// Run every rule against an already-normalized word
///
/// The root word itself is not excluded; it is accepted once like any other
/// word and then caught by the uniqueness rule.
pub fn validate<C: SpellChecker + ?Sized>(
    word: &str,
    round: RoundView<'_>,
    checker: &C,
) -> Verdict {
    check_length(word, round.mode)
        .and_then(|()| check_original(word, round.used_words))
        .and_then(|()| check_possible(word, round.root_word))
        .and_then(|()| check_real(word, checker))
        .map(|()| word.to_string())
        .into()
}
