//! Game session state
//!
//! Owns the current root word and the words accepted so far. All mutation
//! goes through `start_new_round`, `submit` and `set_mode`; observers are told
//! about every change through `subscribe`.

use super::validator::{RoundView, validate};
use crate::core::{FALLBACK_ROOT, Mode, Rejection, Verdict, normalize};
use crate::lexicon::{Dictionary, Lexicon, SpellChecker};
use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};

/// Whether a round has been started yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingRound,
    InRound,
}

/// Change notification delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    RoundStarted { root: String },
    WordAccepted { word: String },
    WordRejected { rejection: Rejection },
    ModeChanged { mode: Mode },
}

type Subscriber = Box<dyn FnMut(&SessionEvent)>;

/// Single-player game session
pub struct Session<C: SpellChecker = Dictionary> {
    lexicon: Lexicon<C>,
    root_word: Option<String>,
    used_words: Vec<String>,
    mode: Mode,
    rng: StdRng,
    subscribers: Vec<Subscriber>,
}

impl<C: SpellChecker> Session<C> {
    /// Create a session with OS-seeded root word selection
    ///
    /// The session starts in `AwaitingRound`; call `start_new_round` to pick a
    /// root word.
    #[must_use]
    pub fn new(lexicon: Lexicon<C>) -> Self {
        Self::with_rng(lexicon, StdRng::from_os_rng())
    }

    /// Create a session whose root word sequence is reproducible
    #[must_use]
    pub fn with_seed(lexicon: Lexicon<C>, seed: u64) -> Self {
        Self::with_rng(lexicon, StdRng::seed_from_u64(seed))
    }

    fn with_rng(lexicon: Lexicon<C>, rng: StdRng) -> Self {
        Self {
            lexicon,
            root_word: None,
            used_words: Vec::new(),
            mode: Mode::Normal,
            rng,
            subscribers: Vec::new(),
        }
    }

    /// Pick a random root word and clear the accepted words
    ///
    /// Falls back to "silkworm" when the lexicon has no root candidates.
    pub fn start_new_round(&mut self) -> &str {
        let root = self
            .lexicon
            .root_candidates()
            .choose(&mut self.rng)
            .map_or(FALLBACK_ROOT, String::as_str)
            .to_string();
        self.begin_round(root)
    }

    /// Start a round with a specific root word
    ///
    /// The root word is normalized like any submission.
    pub fn start_round_with(&mut self, root: &str) -> &str {
        self.begin_round(normalize(root))
    }

    fn begin_round(&mut self, root: String) -> &str {
        info!("New round with root word '{root}'");
        self.used_words.clear();
        self.notify(&SessionEvent::RoundStarted { root: root.clone() });
        self.root_word.insert(root)
    }

    /// Validate a raw submission and record it if accepted
    ///
    /// Before the first round the root word is empty, so only the length rule
    /// and the impossible-letters rule can fire.
    pub fn submit(&mut self, raw: &str) -> Verdict {
        let word = normalize(raw);
        let round = RoundView {
            root_word: self.root_word(),
            used_words: &self.used_words,
            mode: self.mode,
        };
        let verdict = validate(&word, round, self.lexicon.checker());

        match &verdict {
            Verdict::Accepted(word) => {
                debug!("Accepted '{word}'");
                self.used_words.insert(0, word.clone());
                self.notify(&SessionEvent::WordAccepted { word: word.clone() });
            }
            Verdict::Rejected(rejection) => {
                debug!("Rejected '{word}': {rejection}");
                self.notify(&SessionEvent::WordRejected {
                    rejection: rejection.clone(),
                });
            }
        }

        verdict
    }

    /// Switch difficulty; applies from the next submission
    pub fn set_mode(&mut self, hard: bool) {
        let mode = Mode::from_hard(hard);
        if mode != self.mode {
            debug!("Mode changed to {mode}");
            self.mode = mode;
            self.notify(&SessionEvent::ModeChanged { mode });
        }
    }

    /// Register a callback for every session change
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    fn notify(&mut self, event: &SessionEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    /// Current root word, empty before the first round
    #[must_use]
    pub fn root_word(&self) -> &str {
        self.root_word.as_deref().unwrap_or("")
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.root_word.is_some() {
            SessionState::InRound
        } else {
            SessionState::AwaitingRound
        }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon<C> {
        &self.lexicon
    }
}
