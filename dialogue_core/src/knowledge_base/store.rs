//! Fact Store - the append-only record of one dialogue's statements.

use grammar_rules::Statement;
use serde::{Deserialize, Serialize};

use super::{Fact, FactId, FactQuery, QueryError};

/// Facts in the order they were asserted.
///
/// Nothing is ever removed or reordered; a store lives exactly as long as
/// its dialogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactStore {
    facts: Vec<Fact>,
}

impl FactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a statement. Returns the ID of the new fact.
    pub fn append(&mut self, statement: Statement) -> FactId {
        let fact = Fact::new(statement);
        let id = fact.id;
        self.facts.push(fact);
        id
    }

    /// All facts matching the query, oldest first.
    pub fn select(&self, query: &FactQuery) -> Result<Vec<&Fact>, QueryError> {
        query.select(&self.facts)
    }

    pub fn get_fact(&self, id: FactId) -> Option<&Fact> {
        self.facts.iter().find(|fact| fact.id == id)
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
