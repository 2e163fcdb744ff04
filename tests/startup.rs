use std::error::Error;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use word_scramble::dictionary::WordListDictionary;
use word_scramble::error::GameError;
use word_scramble::game::GameSession;
use word_scramble::wordlists::WordSource;

#[test]
fn test_missing_word_list_is_reported_not_fatal() {
    let err = WordSource::load("missing/start.txt").unwrap_err();

    let GameError::ResourceMissing { path, source } = &err;
    assert_eq!(path.to_str(), Some("missing/start.txt"));
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);

    assert_eq!(
        err.to_string(),
        "could not load word list from missing/start.txt"
    );
    assert!(err.source().is_some());
}

#[test]
fn test_missing_dictionary_is_reported() {
    let result = WordListDictionary::load("missing/dictionary.txt", "en");
    assert!(matches!(result, Err(GameError::ResourceMissing { .. })));
}

#[test]
fn test_unreadable_word_list_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let result = WordSource::load(file.path());
    assert!(matches!(result, Err(GameError::ResourceMissing { .. })));
}

#[test]
fn test_loaded_lists_drive_a_session() {
    let dir = TempDir::new().unwrap();
    let start = dir.path().join("start.txt");
    let words = dir.path().join("dictionary.txt");
    std::fs::write(&start, "Silkworm\n\n").unwrap();
    std::fs::write(&words, "silk\nworm\n").unwrap();

    let source = WordSource::load(&start).unwrap();
    let dictionary = WordListDictionary::load(&words, "en").unwrap();

    let mut session = GameSession::new(&source, &dictionary);
    session.reset();

    assert_eq!(session.root_word().unwrap().text(), "silkworm");
    assert!(session.submit("worm").is_ok());
    assert_eq!(session.score(), 1);
}
