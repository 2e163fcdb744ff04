//! Reasons a submitted word is turned down

use thiserror::Error;

/// A candidate failed validation
///
/// Rejections are recoverable and never change session state. The `Display` text is
/// the short title; [`Rejection::message`] carries the longer explanation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The candidate is the root word itself
    #[error("Word not accepted")]
    NotAccepted,

    /// The candidate was already accepted this session
    #[error("Word used already")]
    UsedAlready,

    /// The root word does not have the letters to spell the candidate
    #[error("Word not possible")]
    NotPossible { word: String, root: String },

    /// The dictionary does not know the candidate
    #[error("Word not recognized")]
    NotRecognized,
}

impl Rejection {
    /// Short heading, suitable for an alert title
    #[must_use]
    pub fn title(&self) -> String {
        self.to_string()
    }

    /// Explanation shown under the title
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NotAccepted => "You can't enter the given word".to_string(),
            Self::UsedAlready => "Be more original".to_string(),
            Self::NotPossible { word, root } => {
                format!("You can't spell '{word}' from '{root}'")
            }
            Self::NotRecognized => "The entered word is not real".to_string(),
        }
    }
}
