#![allow(dead_code)]

use word_scramble::dictionary::WordListDictionary;
use word_scramble::wordlists::WordSource;

/// Word source that always draws `root`
pub fn fixed_source(root: &str) -> WordSource {
    WordSource::from_words([root])
}

/// Small dictionary of words spellable from "silkworm" (plus a few that are not)
pub fn silkworm_dictionary() -> WordListDictionary {
    WordListDictionary::from_words(
        [
            "silk", "milk", "worm", "worms", "owl", "owls", "slow", "soil", "silo", "work",
            "works", "rows", "mow", "lows", "silkworm", "silky", "wool",
        ],
        "en",
    )
}

/// Dictionary for the multiplicity examples
pub fn letters_dictionary() -> WordListDictionary {
    WordListDictionary::from_words(["abc", "aab", "abbb", "cab", "aabbc"], "en")
}
