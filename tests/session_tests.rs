// Integration tests for the word game session
// These drive the public API with the embedded word lists

use word_scramble::core::{LetterPool, RejectionKind, Verdict};
use word_scramble::game::{Session, SessionState};
use word_scramble::lexicon::{Lexicon, SpellChecker};

fn silkworm_session() -> Session {
    let mut session = Session::with_seed(Lexicon::embedded(), 11);
    session.start_round_with("silkworm");
    session
}

#[test]
fn test_silk_then_uppercase_silk() {
    let mut session = silkworm_session();

    assert_eq!(session.submit("silk"), Verdict::Accepted("silk".to_string()));
    assert_eq!(session.used_words(), ["silk"]);

    // Different case normalizes to the same word
    assert_eq!(
        session.submit("SILK").rejection_kind(),
        Some(RejectionKind::AlreadyUsed)
    );
    assert_eq!(session.used_words(), ["silk"]);
}

#[test]
fn test_silkworms_is_not_possible() {
    let mut session = silkworm_session();
    assert_eq!(
        session.submit("silkworms").rejection_kind(),
        Some(RejectionKind::NotPossible)
    );
}

#[test]
fn test_empty_input_too_short_in_both_modes() {
    let mut session = silkworm_session();
    assert_eq!(
        session.submit("").rejection_kind(),
        Some(RejectionKind::TooShort)
    );
    assert_eq!(
        session.submit("   ").rejection_kind(),
        Some(RejectionKind::TooShort)
    );

    session.set_mode(true);
    assert_eq!(
        session.submit("").rejection_kind(),
        Some(RejectionKind::TooShort)
    );
}

#[test]
fn test_hard_mode_length_boundary() {
    let mut session = silkworm_session();
    session.set_mode(true);

    // Exactly three letters
    assert_eq!(
        session.submit("sir").rejection_kind(),
        Some(RejectionKind::TooShort)
    );
    // Exactly four letters
    assert!(session.submit("silk").is_accepted());
}

#[test]
fn test_order_is_most_recent_first() {
    let mut session = silkworm_session();
    assert!(session.submit("silk").is_accepted());
    assert!(session.submit("worm").is_accepted());
    assert!(session.submit("milk").is_accepted());
    assert_eq!(session.used_words(), ["milk", "worm", "silk"]);
}

#[test]
fn test_rejection_is_idempotent() {
    let mut session = silkworm_session();
    session.submit("silk");

    for word in ["klis", "silkworms", "silk", ""] {
        let before = session.used_words().to_vec();
        let first = session.submit(word);
        let second = session.submit(word);
        assert_eq!(first, second, "'{word}' changed verdict on resubmission");
        assert!(!first.is_accepted());
        assert_eq!(session.used_words(), before.as_slice());
    }
}

#[test]
fn test_root_word_accepted_once() {
    let mut session = silkworm_session();
    assert!(session.submit("silkworm").is_accepted());
    assert_eq!(
        session.submit("silkworm").rejection_kind(),
        Some(RejectionKind::AlreadyUsed)
    );
}

#[test]
fn test_used_words_hold_invariants() {
    let mut session = silkworm_session();
    for word in [
        "silk", " Worm ", "MILK", "silk", "sir", "slim", "klis", "work", "silo", "mow", "zebra",
    ] {
        session.submit(word);
    }

    let pool = LetterPool::new(session.root_word());
    let used = session.used_words();
    for (i, word) in used.iter().enumerate() {
        assert_eq!(word, &word.trim().to_lowercase());
        assert!(pool.can_spell(word), "'{word}' not spellable");
        assert!(session.lexicon().is_real_word(word), "'{word}' not real");
        assert!(
            !used[i + 1..].contains(word),
            "'{word}' appears more than once"
        );
    }
    assert_eq!(used.len(), 8);
}

#[test]
fn test_new_round_resets_progress() {
    let mut session = silkworm_session();
    session.submit("silk");

    let root = session.start_new_round().to_string();
    assert_eq!(session.state(), SessionState::InRound);
    assert!(session.used_words().is_empty());
    assert!(
        session
            .lexicon()
            .root_candidates()
            .iter()
            .any(|candidate| *candidate == root)
    );
}

#[test]
fn test_custom_spell_checker() {
    struct Everything;

    impl SpellChecker for Everything {
        fn is_real_word(&self, word: &str) -> bool {
            !word.trim().is_empty()
        }
    }

    let mut session = Session::with_seed(
        Lexicon::with_checker(vec!["silkworm".to_string()], Everything),
        1,
    );
    session.start_new_round();

    assert!(session.submit("klis").is_accepted());
    assert_eq!(
        session.submit("zzz").rejection_kind(),
        Some(RejectionKind::NotPossible)
    );
}

#[test]
fn test_spellable_everyday_words_are_accepted() {
    let cases = [
        ("silkworm", ["works", "milks", "rows", "owls"].as_slice()),
        ("keyboard", ["bored", "bread"].as_slice()),
        ("umbrella", ["rumble", "mural", "label"].as_slice()),
    ];

    for (root, words) in cases {
        let mut session = Session::with_seed(Lexicon::embedded(), 3);
        session.start_round_with(root);
        for &word in words {
            assert_eq!(
                session.submit(word),
                Verdict::Accepted(word.to_string()),
                "'{word}' from '{root}'"
            );
        }
        assert_eq!(session.used_words().len(), words.len());
    }
}
