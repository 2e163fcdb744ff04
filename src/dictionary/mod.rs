//! Spelling oracle
//!
//! The game only needs to ask whether a word is spelled correctly in a language.
//! [`WordListDictionary`] answers that from a bundled word list.

use crate::error::GameError;
use crate::wordlists::DICTIONARY_WORDS;
use crate::wordlists::loader::load_from_file;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Language of the bundled dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Anything that can tell correctly spelled words from misspelled ones
pub trait Dictionary {
    /// Check whether `word` is a correctly spelled word in `language`
    fn is_valid(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        (**self).is_valid(word, language)
    }
}

/// Dictionary backed by a single-language word list
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// The English word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY_WORDS.iter().copied(), DEFAULT_LANGUAGE)
    }

    /// Load a word list for `language` from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ResourceMissing`] if the file cannot be located or read.
    pub fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self, GameError> {
        let words = load_from_file(path)?;
        Ok(Self::from_words(words, language))
    }

    /// Build a dictionary from in-memory words
    pub fn from_words<I, S>(words: I, language: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.to_lowercase(),
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether queries in `language` can ever succeed
    #[must_use]
    pub fn speaks(&self, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language)
    }

    /// All known words, in no particular order
    #[must_use]
    pub fn words(&self) -> &FxHashSet<String> {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        self.speaks(language) && self.contains(word)
    }
}
