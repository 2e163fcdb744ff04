//! Candidate validation pipeline
//!
//! Checks run in a fixed order and stop at the first failure. The order decides
//! which message a player sees, so it must not change:
//!
//! 1. length (silent)
//! 2. not the root word
//! 3. not already accepted
//! 4. spellable from the root word's letters
//! 5. known to the dictionary

use super::rejection::Rejection;
use crate::core::{Candidate, RootWord};
use crate::dictionary::Dictionary;

/// Outcome of a candidate that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Passed every check
    Valid,
    /// Too short to be worth a message
    TooShort,
}

/// Everything a candidate is checked against
#[derive(Debug)]
pub struct Rules<'a, D: ?Sized> {
    pub root: &'a RootWord,
    pub accepted: &'a [String],
    pub dictionary: &'a D,
    pub language: &'a str,
}

impl<D: Dictionary + ?Sized> Rules<'_, D> {
    /// Run the pipeline against `candidate`
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] for the first check (2 through 5) the candidate fails.
    pub fn validate(&self, candidate: &Candidate) -> Result<Verdict, Rejection> {
        if !candidate.is_long_enough() {
            return Ok(Verdict::TooShort);
        }

        if candidate.is_root(self.root) {
            return Err(Rejection::NotAccepted);
        }

        if !is_original(candidate, self.accepted) {
            return Err(Rejection::UsedAlready);
        }

        if !is_possible(candidate, self.root) {
            return Err(Rejection::NotPossible {
                word: candidate.text().to_string(),
                root: self.root.text().to_string(),
            });
        }

        if !self.dictionary.is_valid(candidate.text(), self.language) {
            return Err(Rejection::NotRecognized);
        }

        Ok(Verdict::Valid)
    }
}

/// The candidate has not been accepted before
#[must_use]
pub fn is_original(candidate: &Candidate, accepted: &[String]) -> bool {
    !accepted.iter().any(|w| w == candidate.text())
}

/// Every letter of the candidate can be matched to a distinct letter of the root
#[must_use]
pub fn is_possible(candidate: &Candidate, root: &RootWord) -> bool {
    root.letters().spell(candidate.text())
}
