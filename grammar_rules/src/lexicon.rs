//! The grammar tables - every fixed word list the parser consults.
//!
//! A [`Lexicon`] is immutable once built and is passed by reference to
//! whoever needs it. The defaults describe the standard dialogue language;
//! any table can be overridden from TOML.

use serde::{Deserialize, Serialize};

use crate::GrammarError;

/// The kind of question announced by a sentence's first word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionOpener {
    /// "do" / "does" - answered with yes, no or maybe.
    TrueFalse,
    Who,
    What,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Words that make a statement negative, either as its subject or
    /// directly after it.
    pub negating_words: Vec<String>,

    /// Subjects that stand for every possible subject.
    pub all_encompassing_words: Vec<String>,

    /// Subjects that agree with "do" rather than "does".
    pub do_pronouns: Vec<String>,

    pub true_false_openers: Vec<String>,
    pub who_opener: String,
    pub what_opener: String,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            negating_words: words(&["don't", "doesn't", "nobody"]),
            all_encompassing_words: words(&["everybody", "nobody"]),
            do_pronouns: words(&["I", "you"]),
            true_false_openers: words(&["do", "does"]),
            who_opener: "who".to_string(),
            what_opener: "what".to_string(),
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Lexicon {
    /// Parse a lexicon from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, GrammarError> {
        Ok(toml::from_str(source)?)
    }

    pub fn is_negating(&self, word: &str) -> bool {
        self.negating_words.iter().any(|w| w == word)
    }

    pub fn is_all_encompassing(&self, word: &str) -> bool {
        self.all_encompassing_words.iter().any(|w| w == word)
    }

    pub fn uses_do(&self, word: &str) -> bool {
        self.do_pronouns.iter().any(|w| w == word)
    }

    /// Classify the first word of a question.
    ///
    /// Openers are compared ignoring ASCII case, since they usually start
    /// the sentence with a capital letter.
    pub fn question_opener(&self, word: &str) -> Option<QuestionOpener> {
        if self
            .true_false_openers
            .iter()
            .any(|w| w.eq_ignore_ascii_case(word))
        {
            Some(QuestionOpener::TrueFalse)
        } else if self.who_opener.eq_ignore_ascii_case(word) {
            Some(QuestionOpener::Who)
        } else if self.what_opener.eq_ignore_ascii_case(word) {
            Some(QuestionOpener::What)
        } else {
            None
        }
    }
}
