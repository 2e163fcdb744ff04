//! Letter multisets for constructibility checks
//!
//! Each letter of the root word can back at most one letter of a candidate.

use rustc_hash::FxHashMap;

/// Letters still available to spell with, tracked with multiplicity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Remaining occurrences of `letter`
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters remaining
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.counts.values().sum()
    }

    /// Consume letters for each character of `word` in order
    ///
    /// Stops at the first letter the pool cannot supply.
    pub fn spell(&mut self, word: &str) -> bool {
        word.chars().all(|ch| self.take(ch))
    }
}

/// Check whether `word` can be spelled from the letters of `root`
///
/// # Examples
/// ```
/// use word_scramble::core::can_spell;
///
/// assert!(can_spell("aabbc", "abc"));
/// assert!(can_spell("aabbc", "aab"));
/// assert!(!can_spell("aabbc", "abbb"));
/// ```
#[must_use]
pub fn can_spell(root: &str, word: &str) -> bool {
    LetterPool::from_word(root).spell(word)
}
