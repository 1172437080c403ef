//! Fact definitions - statements as they are kept in the store.

use grammar_rules::Statement;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactId(pub Uuid);

impl FactId {
    /// Create a new random fact ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FactId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A statement that has been asserted in the current dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: FactId,
    pub statement: Statement,
}

impl Fact {
    /// Create a new fact with a fresh ID.
    pub fn new(statement: Statement) -> Self {
        Self {
            id: FactId::new(),
            statement,
        }
    }
}
