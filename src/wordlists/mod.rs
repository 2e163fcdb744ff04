//! Word lists for Word Scramble
//!
//! Provides embedded word lists compiled into the binary and the root word source
//! sessions draw from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::WordSource;
