//! Sentences - the parsed form of one line of dialogue.
//!
//! The kind of a sentence is decided by its last character alone:
//! - `.` is a [`Statement`]
//! - `?` is a [`Question`]
//! - `!` is the [`DialogueEnd`]

mod parser;

pub use parser::*;

use serde::{Deserialize, Serialize};

use crate::{Object, Predicate, Subject};

/// One parsed line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentence {
    Statement(Statement),
    Question(Question),
    End(DialogueEnd),
}

impl Sentence {
    /// The line this sentence was parsed from.
    pub fn raw(&self) -> &str {
        match self {
            Sentence::Statement(statement) => &statement.raw,
            Sentence::Question(question) => &question.raw,
            Sentence::End(end) => &end.raw,
        }
    }
}

/// An asserted fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub raw: String,
    pub subject: Subject,
    pub predicate: Predicate,
    pub object: Option<Object>,
    pub is_negative: bool,
    /// Copied from the subject.
    pub is_all_encompassing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub raw: String,
    pub kind: QuestionKind,
}

/// What a question asks for, with exactly the parts its grammar parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// "Do I code in Python?"
    TrueFalse {
        subject: Subject,
        predicate: Predicate,
        object: Option<Object>,
    },

    /// "Who runs the school?"
    Who {
        predicate: Predicate,
        object: Option<Object>,
    },

    /// "What do I like?"
    ///
    /// The verb is read past but not kept; the answer covers every fact
    /// about the subject.
    What { subject: Subject },
}

/// The exclamation that closes a dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueEnd {
    pub raw: String,
}
