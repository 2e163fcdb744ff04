//! Core domain types for Word Scramble
//!
//! This module contains the fundamental domain types. Everything here is pure and
//! independent of word lists, dictionaries and session state.

mod letters;
mod word;

pub use letters::{LetterPool, can_spell};
pub use word::{Candidate, DEFAULT_ROOT_WORD, MIN_WORD_LENGTH, RootWord};
