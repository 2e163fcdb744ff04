mod common;

use common::*;
use proptest::prelude::*;
use word_scramble::core::can_spell;
use word_scramble::dictionary::{Dictionary, WordListDictionary};
use word_scramble::game::{GameSession, Rejection, SessionState, Submission};
use word_scramble::wordlists::WordSource;

#[test]
fn test_silkworm_scenario() {
    let source = fixed_source("silkworm");
    let dictionary = silkworm_dictionary();
    let mut session = GameSession::new(&source, &dictionary);
    session.reset();

    assert_eq!(
        session.submit("silk"),
        Ok(Submission::Accepted {
            word: "silk".into(),
            score: 1
        })
    );
    assert_eq!(session.accepted_words(), &["silk"]);

    assert_eq!(session.submit("silk"), Err(Rejection::UsedAlready));
    assert_eq!(session.score(), 1);
}

#[test]
fn test_root_word_rejected_even_when_real() {
    let source = fixed_source("silkworm");
    let dictionary = silkworm_dictionary();
    assert!(dictionary.is_valid("silkworm", "en"));

    let mut session = GameSession::new(&source, &dictionary);
    session.reset();

    assert_eq!(session.submit("silkworm"), Err(Rejection::NotAccepted));
    assert_eq!(session.score(), 0);
}

#[test]
fn test_short_root_is_ignored_not_rejected() {
    let source = fixed_source("ox");
    let dictionary = WordListDictionary::from_words(["ox"], "en");
    let mut session = GameSession::new(&source, &dictionary);
    session.reset();

    assert_eq!(session.submit("ox"), Ok(Submission::Ignored));
    assert_eq!(session.submit(" OX "), Ok(Submission::Ignored));
}

#[test]
fn test_multiplicity() {
    let source = fixed_source("aabbc");
    let dictionary = letters_dictionary();
    let mut session = GameSession::new(&source, &dictionary);
    session.reset();

    assert!(session.submit("abc").is_ok());
    assert!(session.submit("aab").is_ok());
    assert_eq!(
        session.submit("abbb"),
        Err(Rejection::NotPossible {
            word: "abbb".into(),
            root: "aabbc".into()
        })
    );
    assert_eq!(session.score(), 2);
}

#[test]
fn test_rejection_messages() {
    let source = fixed_source("silkworm");
    let dictionary = silkworm_dictionary();
    let mut session = GameSession::new(&source, &dictionary);
    session.reset();
    session.submit("silk").unwrap();

    let cases = [
        ("silkworm", "Word not accepted", "You can't enter the given word"),
        ("silk", "Word used already", "Be more original"),
        ("wool", "Word not possible", "You can't spell 'wool' from 'silkworm'"),
        ("slim", "Word not recognized", "The entered word is not real"),
    ];

    for (word, title, message) in cases {
        let rejection = session.submit(word).unwrap_err();
        assert_eq!(rejection.title(), title, "title for {word}");
        assert_eq!(rejection.message(), message, "message for {word}");
    }
}

#[test]
fn test_reset_after_activity() {
    let source = WordSource::from_words(["silkworm", "absolute"]);
    let dictionary = silkworm_dictionary();
    let mut session = GameSession::new(&source, &dictionary).with_seed(3);
    assert_eq!(session.state(), SessionState::Idle);

    session.reset();
    let _ = session.submit("silk");
    let _ = session.submit("milk");
    session.reset();

    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.score(), 0);
    assert!(session.accepted_words().is_empty());
    let root = session.root_word().unwrap().text();
    assert!(root == "silkworm" || root == "absolute");
}

#[test]
fn test_embedded_lists_play_a_game() {
    let source = fixed_source("silkworm");
    let dictionary = WordListDictionary::embedded();
    let mut session = GameSession::new(&source, &dictionary);
    session.reset();

    for word in ["silk", "milk", "worm"] {
        assert!(
            matches!(session.submit(word), Ok(Submission::Accepted { .. })),
            "{word} should be accepted"
        );
    }
    assert_eq!(session.score(), 3);
}

proptest! {
    #[test]
    fn score_always_matches_accepted_words(
        entries in prop::collection::vec("[a-z ]{0,9}|silk|milk|worm|owls|works", 0..40),
        resets in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let source = fixed_source("silkworm");
        let dictionary = silkworm_dictionary();
        let mut session = GameSession::new(&source, &dictionary);
        session.reset();

        for (i, entry) in entries.iter().enumerate() {
            if resets.get(i).copied().unwrap_or(false) {
                session.reset();
            }
            let _ = session.submit(entry);
            prop_assert_eq!(session.score(), session.accepted_words().len());
        }
    }

    #[test]
    fn accepted_words_satisfy_every_check(
        entries in prop::collection::vec("[a-zA-Z ]{0,9}|silk|milk|worm|owls|works|SILK", 0..40),
    ) {
        let source = fixed_source("silkworm");
        let dictionary = silkworm_dictionary();
        let mut session = GameSession::new(&source, &dictionary);
        session.reset();

        for entry in &entries {
            let _ = session.submit(entry);
        }

        let accepted = session.accepted_words();
        for word in accepted {
            prop_assert!(word.chars().count() > 2);
            prop_assert_ne!(word.as_str(), "silkworm");
            prop_assert_eq!(accepted.iter().filter(|w| *w == word).count(), 1);
            prop_assert!(can_spell("silkworm", word));
            prop_assert!(dictionary.is_valid(word, "en"));
        }
    }

    #[test]
    fn rejection_is_idempotent(word in "[a-z]{0,10}") {
        let source = fixed_source("silkworm");
        let dictionary = silkworm_dictionary();
        let mut session = GameSession::new(&source, &dictionary);
        session.reset();

        let first = session.submit(&word);
        if let Err(rejection) = first {
            let score = session.score();
            let accepted = session.accepted_words().to_vec();

            prop_assert_eq!(session.submit(&word), Err(rejection));
            prop_assert_eq!(session.score(), score);
            prop_assert_eq!(session.accepted_words(), accepted.as_slice());
        }
    }

    #[test]
    fn spellable_iff_letters_suffice(root in "[a-e]{1,8}", word in "[a-e]{0,8}") {
        let fits = word.chars().all(|c| {
            word.chars().filter(|&w| w == c).count() <= root.chars().filter(|&r| r == c).count()
        });
        prop_assert_eq!(can_spell(&root, &word), fits);
    }
}
