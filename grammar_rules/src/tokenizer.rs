//! Word tokenizer.

use crate::Word;

/// Split a raw line into words.
///
/// The line is split on single spaces, then every run of non-letters at
/// either end of a token is dropped. Apostrophes and other characters inside
/// a word survive, so "don't" stays intact while "Python?" becomes "Python".
/// Consecutive spaces yield empty words.
pub fn tokenize(line: &str) -> Vec<Word> {
    line.split(' ').map(|token| Word::new(strip_punctuation(token))).collect()
}

fn strip_punctuation(token: &str) -> &str {
    token
        .trim_start_matches(|c: char| !c.is_ascii_alphabetic())
        .trim_end_matches(|c: char| !c.is_ascii_alphabetic())
}
