//! Subjects and their agreement rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Word;
use crate::Lexicon;

/// The subject of a clause.
///
/// The flags are computed from the lexicon when the subject is parsed and
/// stay with it, even when its text is later rewritten for an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub text: String,

    /// The subject is itself a negating word, such as "nobody".
    pub is_negative: bool,

    /// The subject agrees with "do" rather than "does".
    pub uses_do: bool,

    /// The subject stands for everyone ("everybody", "nobody").
    pub is_all_encompassing: bool,
}

impl Subject {
    pub fn parse(word: &Word, lexicon: &Lexicon) -> Self {
        let text = word.text.as_str();
        Self {
            text: text.to_string(),
            is_negative: lexicon.is_negating(text),
            uses_do: lexicon.uses_do(text),
            is_all_encompassing: lexicon.is_all_encompassing(text),
        }
    }

    /// The same subject under a different name.
    pub fn renamed(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Whether two subjects refer to the same party when looking up facts.
    ///
    /// An all-encompassing subject on either side matches anything.
    pub fn matches(&self, other: &Subject) -> bool {
        self.text == other.text || self.is_all_encompassing || other.is_all_encompassing
    }

    /// The auxiliary that agrees with this subject.
    pub fn agree(&self, negative: bool) -> &'static str {
        match (self.uses_do, negative) {
            (true, true) => "don't",
            (false, true) => "doesn't",
            (true, false) => "do",
            (false, false) => "does",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
