//! Errors that abort a run of dialogues.

use grammar_rules::GrammarError;
use thiserror::Error;

use crate::knowledge_base::QueryError;

#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("input is empty; expected the number of dialogues")]
    MissingDialogueCount,

    #[error("expected the number of dialogues, found {line:?}")]
    InvalidDialogueCount { line: String },

    #[error("input ended before dialogue #{number} was closed with '!'")]
    UnterminatedDialogue { number: usize },

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("internal query error: {0}")]
    Query(#[from] QueryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize transcript: {0}")]
    Json(#[from] serde_json::Error),
}
