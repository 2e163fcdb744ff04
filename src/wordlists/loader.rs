//! Word list loading utilities
//!
//! Reads newline-delimited word lists from disk or from the embedded constants.

use crate::error::GameError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load words from a file
///
/// One word per line. Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns [`GameError::ResourceMissing`] if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| GameError::resource_missing(path, e))?;

    let words = parse_word_list(&content);
    info!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

/// Split newline-delimited text into normalized words
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_word_list("silkworm\n\nabsolute\n");
        assert_eq!(words, vec!["silkworm", "absolute"]);
    }

    #[test]
    fn parse_trims_and_lowercases() {
        let words = parse_word_list("  Silkworm \r\nABSOLUTE\n");
        assert_eq!(words, vec!["silkworm", "absolute"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["silkworm", "absolute"]);
        assert_eq!(words, vec!["silkworm", "absolute"]);
    }

    #[test]
    fn load_missing_file_is_resource_missing() {
        let result = load_from_file("definitely/not/here/start.txt");
        assert!(matches!(result, Err(GameError::ResourceMissing { .. })));
    }

    #[test]
    fn load_from_real_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "silkworm").unwrap();
        writeln!(file, "Absolute").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["silkworm", "absolute"]);
    }
}
