//! Solutions command
//!
//! Lists every dictionary word a fresh session would accept for a given root word.

use crate::core::{Candidate, RootWord};
use crate::dictionary::WordListDictionary;
use crate::game::{Rules, Verdict};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Words that can be scored from one root word
#[derive(Debug, Clone)]
pub struct SolutionsResult {
    pub root: String,
    /// Sorted by length, then alphabetically
    pub words: Vec<String>,
}

impl SolutionsResult {
    /// Best possible score for the root word
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.words.len()
    }

    /// Number of solutions of each length
    #[must_use]
    pub fn by_length(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for word in &self.words {
            *counts.entry(word.chars().count()).or_insert(0) += 1;
        }
        counts
    }
}

/// Find every dictionary word that would be accepted against `root`
///
/// Each word goes through the same pipeline as a player's submission, against an
/// empty accepted list.
#[must_use]
pub fn find_solutions(
    root: &RootWord,
    dictionary: &WordListDictionary,
    language: &str,
) -> SolutionsResult {
    let rules = Rules {
        root,
        accepted: &[],
        dictionary,
        language,
    };

    let mut words: Vec<String> = dictionary
        .words()
        .par_iter()
        .filter(|word| rules.validate(&Candidate::new(word.as_str())) == Ok(Verdict::Valid))
        .cloned()
        .collect();

    words.sort_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    });

    SolutionsResult {
        root: root.text().to_string(),
        words,
    }
}
