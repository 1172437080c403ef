//! Dialogue sessions - the state of one dialogue from its first line to its
//! closing exclamation.

use grammar_rules::{Sentence, SentenceParser};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::answerer::Answerer;
use crate::config::Config;
use crate::error::DialogueError;
use crate::knowledge_base::{ContradictionDetector, FactId, FactStore};

/// Unique identifier for dialogue sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What handling one line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// A statement was added to the facts.
    Recorded { fact: FactId },
    Answered { question: String, answer: String },
    /// The dialogue is over.
    Ended { farewell: String },
}

/// One dialogue in progress.
///
/// Sessions share nothing with each other; the facts and the contradiction
/// flag are dropped with the session.
#[derive(Debug)]
pub struct DialogueSession<'c> {
    id: SessionId,
    number: usize,
    config: &'c Config,
    facts: FactStore,
    detector: ContradictionDetector,
}

impl<'c> DialogueSession<'c> {
    pub fn new(number: usize, config: &'c Config) -> Self {
        Self {
            id: SessionId::new(),
            number,
            config,
            facts: FactStore::new(),
            detector: ContradictionDetector::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// 1-based position of this dialogue in the input.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn facts(&self) -> &FactStore {
        &self.facts
    }

    pub fn is_contradicted(&self) -> bool {
        self.detector.is_contradicted()
    }

    /// Parse and handle one raw line.
    pub fn handle_line(&mut self, line: &str) -> Result<Turn, DialogueError> {
        let sentence = SentenceParser::new(&self.config.lexicon).parse(line)?;
        debug!(session = %self.id, ?sentence, "parsed sentence");
        self.handle(sentence)
    }

    pub fn handle(&mut self, sentence: Sentence) -> Result<Turn, DialogueError> {
        match sentence {
            Sentence::Statement(statement) => {
                let was_contradicted = self.is_contradicted();
                let conflict = self.detector.observe(&self.facts, &statement)?;
                let fact = self.facts.append(statement);

                if let (Some(existing), false) = (conflict, was_contradicted) {
                    warn!(
                        session = %self.id,
                        %existing,
                        incoming = %fact,
                        "dialogue #{} is contradicted; further questions will be refused",
                        self.number
                    );
                }
                debug!(session = %self.id, %fact, facts = self.facts.len(), "fact recorded");
                Ok(Turn::Recorded { fact })
            }
            Sentence::Question(question) => {
                let answer = if self.is_contradicted() {
                    self.config.messages.contradiction.clone()
                } else {
                    Answerer::new(&self.config.messages).answer(&question, &self.facts)?
                };
                Ok(Turn::Answered {
                    question: question.raw,
                    answer,
                })
            }
            Sentence::End(end) => Ok(Turn::Ended { farewell: end.raw }),
        }
    }
}
