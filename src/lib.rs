//! Word Scramble
//!
//! A word game: the player is given a random root word and scores a point for every
//! real, original word they can spell using only the root word's letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{GameSession, Rejection, Submission};
//! use word_scramble::wordlists::WordSource;
//!
//! let source = WordSource::from_words(["silkworm"]);
//! let dictionary = WordListDictionary::from_words(["silk", "worm"], "en");
//!
//! let mut session = GameSession::new(&source, &dictionary);
//! session.reset();
//!
//! assert!(matches!(session.submit("Silk "), Ok(Submission::Accepted { .. })));
//! assert_eq!(session.submit("silk"), Err(Rejection::UsedAlready));
//! assert_eq!(session.score(), 1);
//! ```

// Core domain types
pub mod core;

// Spelling oracle
pub mod dictionary;

// Startup errors
pub mod error;

// Session state and the validation pipeline
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
