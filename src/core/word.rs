//! Root words and player candidates
//!
//! Both are normalized on construction: surrounding whitespace trimmed, lowercased.

use super::letters::LetterPool;
use std::fmt;

/// Root word used when the word source has nothing to draw from
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Candidates must be strictly longer than this many letters
pub const MIN_WORD_LENGTH: usize = 2;

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The word a session's candidates are spelled from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

impl RootWord {
    /// Create a root word, normalizing case and surrounding whitespace
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" SilkWorm\n");
    /// assert_eq!(root.text(), "silkworm");
    /// ```
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: normalize(text.as_ref()),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters available for spelling candidates
    #[must_use]
    pub fn letters(&self) -> LetterPool {
        LetterPool::from_word(&self.text)
    }
}

impl Default for RootWord {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_WORD)
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Normalized player input awaiting validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    text: String,
}

impl Candidate {
    /// Normalize raw player input
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// assert_eq!(Candidate::new("  Silk\t").text(), "silk");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            text: normalize(raw.as_ref()),
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (characters, not bytes)
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the candidate is long enough to be worth validating
    #[must_use]
    pub fn is_long_enough(&self) -> bool {
        self.letter_count() > MIN_WORD_LENGTH
    }

    /// Whether the candidate is the root word itself
    #[must_use]
    pub fn is_root(&self, root: &RootWord) -> bool {
        self.text == root.text()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_normalizes_case_and_whitespace() {
        assert_eq!(Candidate::new("WORM").text(), "worm");
        assert_eq!(Candidate::new("  milk \n").text(), "milk");
        assert_eq!(Candidate::new("\tSiLk").text(), "silk");
    }

    #[test]
    fn candidate_keeps_inner_whitespace() {
        assert_eq!(Candidate::new(" ice cream ").text(), "ice cream");
    }

    #[test]
    fn candidate_length_counts_characters() {
        assert_eq!(Candidate::new("née").letter_count(), 3);
        assert_eq!(Candidate::new("").letter_count(), 0);
        assert_eq!(Candidate::new("   ").letter_count(), 0);
    }

    #[test]
    fn length_threshold() {
        assert!(!Candidate::new("ab").is_long_enough());
        assert!(!Candidate::new("  ab  ").is_long_enough());
        assert!(Candidate::new("abc").is_long_enough());
    }

    #[test]
    fn is_root_after_normalization() {
        let root = RootWord::new("silkworm");
        assert!(Candidate::new(" SILKWORM ").is_root(&root));
        assert!(!Candidate::new("silk").is_root(&root));
    }

    #[test]
    fn default_root_word() {
        assert_eq!(RootWord::default().text(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", RootWord::new("Silkworm")), "silkworm");
        assert_eq!(format!("{}", Candidate::new("Silk")), "silk");
    }
}
