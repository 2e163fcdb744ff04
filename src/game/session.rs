//! Game session state and lifecycle

use super::rejection::Rejection;
use super::validation::{Rules, Verdict};
use crate::core::{Candidate, RootWord};
use crate::dictionary::{DEFAULT_LANGUAGE, Dictionary};
use crate::wordlists::WordSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, waiting for the first [`GameSession::reset`]
    Idle,
    /// A root word has been drawn
    Active,
}

/// Result of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The word was added to the front of the accepted list
    Accepted { word: String, score: usize },
    /// Input too short (or no game running); nothing happened
    Ignored,
}

/// A single player's game: root word, accepted words and score
///
/// The session is the only writer of its state. Frontends read it through the
/// accessors and change it only through [`reset`](Self::reset) and
/// [`submit`](Self::submit).
#[derive(Debug)]
pub struct GameSession<'a, D: Dictionary + ?Sized> {
    source: &'a WordSource,
    dictionary: &'a D,
    language: String,
    rng: StdRng,
    root: Option<RootWord>,
    accepted: Vec<String>,
    score: usize,
}

impl<'a, D: Dictionary + ?Sized> GameSession<'a, D> {
    /// Create an idle session drawing roots from `source` and checking spelling
    /// against `dictionary` in the default language
    pub fn new(source: &'a WordSource, dictionary: &'a D) -> Self {
        Self {
            source,
            dictionary,
            language: DEFAULT_LANGUAGE.to_string(),
            rng: StdRng::from_os_rng(),
            root: None,
            accepted: Vec::new(),
            score: 0,
        }
    }

    /// Check spelling in `language` instead of the default
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Make root word draws reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start a new game: draw a root word, clear accepted words, zero the score
    pub fn reset(&mut self) {
        let root = self.source.pick_root_with(&mut self.rng);
        info!(root = %root, "new game");

        self.root = Some(root);
        self.accepted.clear();
        self.score = 0;
    }

    /// Validate a player's word and record it if it passes
    ///
    /// Input is trimmed and lowercased first. Words of two letters or fewer are
    /// ignored without a rejection, as is any input before the first reset.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] naming the first check the word failed. Rejections
    /// never change the session.
    pub fn submit(&mut self, raw: &str) -> Result<Submission, Rejection> {
        let Some(root) = &self.root else {
            debug!("submission before the first reset ignored");
            return Ok(Submission::Ignored);
        };

        let candidate = Candidate::new(raw);
        let rules = Rules {
            root,
            accepted: &self.accepted,
            dictionary: self.dictionary,
            language: &self.language,
        };

        match rules.validate(&candidate) {
            Ok(Verdict::TooShort) => Ok(Submission::Ignored),
            Ok(Verdict::Valid) => {
                let word = candidate.into_string();
                self.accepted.insert(0, word.clone());
                self.score += 1;
                debug!(word = %word, score = self.score, "word accepted");
                Ok(Submission::Accepted {
                    word,
                    score: self.score,
                })
            }
            Err(rejection) => {
                debug!(word = %candidate, reason = %rejection, "word rejected");
                Err(rejection)
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.root.is_some() {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state() == SessionState::Active
    }

    /// Current root word, `None` until the first reset
    #[must_use]
    pub fn root_word(&self) -> Option<&RootWord> {
        self.root.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}
