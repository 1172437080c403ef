//! Word entities - the building blocks of every sentence.

mod predicate;
mod subject;

pub use predicate::*;
pub use subject::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bare token as produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Everything in a clause after its subject and predicate, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Object {
    pub text: String,
}

impl Object {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Join the remaining words of a clause. No words means no object.
    pub fn from_words(words: &[Word]) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        let text = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self { text })
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_from_words() {
        let words = [Word::new("in"), Word::new("Python")];
        assert_eq!(Object::from_words(&words), Some(Object::new("in Python")));
        assert_eq!(Object::from_words(&[]), None);
    }
}
