// Significant-word extraction for route slip text.
//
// A slip's vocabulary is the set of distinct words in its text. Words are
// maximal runs of alphabetic characters; digits, punctuation and
// whitespace all act as separators and contribute nothing. Compass words,
// filename remnants and URL remnants are filtered out so that boilerplate
// shared by every slip never counts as common content.

use std::collections::HashSet;

/// Substrings marking a word as a compass direction ("northbound",
/// "southeast", ...). Route slips are full of these and they say nothing
/// about which ride the slip describes.
const COMPASS_WORDS: [&str; 4] = ["north", "east", "south", "west"];

/// Shortest word kept, measured after lowercasing.
const MIN_WORD_LEN: usize = 3;

/// Lowercase a candidate word and decide whether it carries content.
///
/// Drops short words, compass words, filename remnants ("...txt") and URL
/// remnants ("http...").
fn simplify(word: &str) -> Option<String> {
    let word = word.to_lowercase();
    if word.chars().count() < MIN_WORD_LEN {
        return None;
    }
    if COMPASS_WORDS.iter().any(|compass| word.contains(compass)) {
        return None;
    }
    if word.ends_with("txt") || word.starts_with("http") {
        return None;
    }
    Some(word)
}

/// Extract the set of significant words from raw slip text.
///
/// Membership only: no frequencies, no order. Empty text yields an empty
/// set.
pub fn significant_words(text: &str) -> HashSet<String> {
    let mut words = HashSet::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphabetic() {
            current.push(c);
        } else if !current.is_empty() {
            if let Some(word) = simplify(&current) {
                words.insert(word);
            }
            current.clear();
        }
    }

    // A word running into the end of the text has no separator after it.
    if !current.is_empty() {
        if let Some(word) = simplify(&current) {
            words.insert(word);
        }
    }

    words
}
