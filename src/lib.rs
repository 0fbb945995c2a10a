//! Word Scramble
//!
//! A word-building game engine: spell as many words as you can from the letters
//! of a randomly chosen root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::RejectionKind;
//! use word_scramble::game::Session;
//! use word_scramble::lexicon::Lexicon;
//!
//! let mut session = Session::new(Lexicon::embedded());
//! session.start_round_with("silkworm");
//!
//! assert!(session.submit("silk").is_accepted());
//! assert_eq!(
//!     session.submit("SILK").rejection_kind(),
//!     Some(RejectionKind::AlreadyUsed)
//! );
//! ```

// Core domain types
pub mod core;

// Game rules and session state
pub mod game;

// Word lists and dictionary
pub mod lexicon;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
