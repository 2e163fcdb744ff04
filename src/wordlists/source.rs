//! Root word source
//!
//! Owns the list of words a session can be started with and draws from it at random.

use super::embedded::START_WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::RootWord;
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::Path;
use tracing::{debug, warn};

/// Static list of candidate root words
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Root words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: words_from_slice(START_WORDS),
        }
    }

    /// Load root words from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ResourceMissing`] if the file cannot be located or read.
    /// The game cannot run without a word source, so callers should treat this as fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        Ok(Self {
            words: load_from_file(path)?,
        })
    }

    /// Build a source from in-memory words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
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

    /// Draw a root word uniformly at random using the thread-local generator
    #[must_use]
    pub fn pick_root(&self) -> RootWord {
        self.pick_root_with(&mut rand::rng())
    }

    /// Draw a root word uniformly at random
    ///
    /// Falls back to [`RootWord::default`] only when the source is empty.
    pub fn pick_root_with<R: Rng + ?Sized>(&self, rng: &mut R) -> RootWord {
        if let Some(word) = self.words.choose(rng) {
            debug!(root = %word, "picked root word");
            RootWord::new(word)
        } else {
            let root = RootWord::default();
            warn!(root = %root, "word source is empty, using default root word");
            root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_ROOT_WORD;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_source_falls_back_to_default() {
        let source = WordSource::default();
        assert_eq!(source.pick_root().text(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn blank_entries_do_not_count() {
        let source = WordSource::from_words(["", "  ", "\n"]);
        assert!(source.is_empty());
        assert_eq!(source.pick_root().text(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn single_word_always_picked() {
        let source = WordSource::from_words(["absolute"]);
        for _ in 0..10 {
            assert_eq!(source.pick_root().text(), "absolute");
        }
    }

    #[test]
    fn pick_is_member_of_source() {
        let source = WordSource::from_words(["absolute", "abstract", "academic"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let root = source.pick_root_with(&mut rng);
            assert!(source.words().iter().any(|w| w == root.text()));
        }
    }

    #[test]
    fn same_seed_same_picks() {
        let source = WordSource::embedded();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(source.pick_root_with(&mut a), source.pick_root_with(&mut b));
        }
    }

    #[test]
    fn every_word_eventually_drawn() {
        let source = WordSource::from_words(["absolute", "abstract", "academic"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(source.pick_root_with(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn from_words_normalizes() {
        let source = WordSource::from_words(["  SilkWorm "]);
        assert_eq!(source.words(), &["silkworm".to_string()]);
    }

    #[test]
    fn embedded_is_not_empty() {
        assert!(!WordSource::embedded().is_empty());
    }
}
