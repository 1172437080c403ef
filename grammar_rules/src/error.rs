//! Errors raised while reading a line of dialogue.

use std::fmt;

use thiserror::Error;

/// The grammatical slot a parser was trying to fill when it ran out of words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRole {
    /// The leading word of a question.
    Opener,
    /// The "do"/"does" that follows "what".
    Auxiliary,
    Subject,
    Predicate,
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordRole::Opener => "question opener",
            WordRole::Auxiliary => "auxiliary",
            WordRole::Subject => "subject",
            WordRole::Predicate => "predicate",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("line does not end in '.', '?' or '!': {line:?}")]
    MissingTerminator { line: String },

    #[error("'{opener}' does not open a known kind of question: {line:?}")]
    UnknownQuestionOpener { opener: String, line: String },

    #[error("expected a {role} but the sentence ended: {line:?}")]
    MissingWord { role: WordRole, line: String },

    #[error("invalid lexicon: {0}")]
    InvalidLexicon(#[from] toml::de::Error),
}
