//! Question Answerer - turns a question and the facts of a dialogue into a
//! reply.
//!
//! Each kind of question has its own algorithm:
//! 1. **True/false**: the most recent fact making the same claim decides
//!    between "yes", "no" and "maybe"
//! 2. **Who**: lists every subject an affirmative fact attributes the claim to
//! 3. **What**: lists everything known about a subject, one clause per fact

mod true_false;
mod what;
mod who;

use grammar_rules::{Question, QuestionKind};

use crate::config::MessageCatalogue;
use crate::knowledge_base::{FactStore, QueryError};

/// Answers questions against a fact store.
#[derive(Debug, Clone, Copy)]
pub struct Answerer<'a> {
    messages: &'a MessageCatalogue,
}

impl<'a> Answerer<'a> {
    pub fn new(messages: &'a MessageCatalogue) -> Self {
        Self { messages }
    }

    /// Answer a question from the facts asserted so far.
    ///
    /// Contradicted dialogues are not handled here; the session replies to
    /// those before asking the answerer.
    pub fn answer(&self, question: &Question, facts: &FactStore) -> Result<String, QueryError> {
        match &question.kind {
            QuestionKind::TrueFalse {
                subject,
                predicate,
                object,
            } => true_false::answer(self.messages, facts, subject, predicate, object.as_ref()),
            QuestionKind::Who { predicate, object } => {
                who::answer(self.messages, facts, predicate, object.as_ref())
            }
            QuestionKind::What { subject } => what::answer(self.messages, facts, subject),
        }
    }
}
