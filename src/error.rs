//! Startup errors
//!
//! Validation failures are not errors of this kind; see [`crate::game::Rejection`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that keep a game from starting
#[derive(Debug, Error)]
pub enum GameError {
    /// A word list could not be located or read
    #[error("could not load word list from {}", .path.display())]
    ResourceMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GameError {
    pub(crate) fn resource_missing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceMissing {
            path: path.into(),
            source,
        }
    }
}
