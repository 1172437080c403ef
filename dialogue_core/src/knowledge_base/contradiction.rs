//! Contradiction Detector.
//!
//! Two statements contradict each other when they make the same claim
//! (see [`FactQuery::same_claim`]) with opposite polarity. Once a dialogue
//! has heard a contradiction it stays contradicted.

use grammar_rules::Statement;
use tracing::debug;

use super::{FactId, FactQuery, FactStore, QueryError};

#[derive(Debug, Clone, Default)]
pub struct ContradictionDetector {
    contradicted: bool,
}

impl ContradictionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_contradicted(&self) -> bool {
        self.contradicted
    }

    /// Check an incoming statement against the facts already stored.
    ///
    /// Must be called before the statement is appended. Returns the earliest
    /// stored fact the statement contradicts, if any.
    pub fn observe(
        &mut self,
        facts: &FactStore,
        statement: &Statement,
    ) -> Result<Option<FactId>, QueryError> {
        let query = FactQuery::same_claim(
            &statement.subject,
            &statement.predicate,
            statement.object.as_ref(),
        );

        let conflict = facts
            .select(&query)?
            .into_iter()
            .find(|fact| fact.statement.is_negative != statement.is_negative)
            .map(|fact| fact.id);

        if let Some(existing) = conflict {
            debug!(%existing, statement = %statement.raw, "statement contradicts an earlier fact");
            self.contradicted = true;
        }

        Ok(conflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::statement;

    fn feed(lines: &[&str]) -> (ContradictionDetector, Vec<Option<FactId>>) {
        let mut detector = ContradictionDetector::new();
        let mut store = FactStore::new();
        let mut conflicts = Vec::new();
        for line in lines {
            let s = statement(line);
            conflicts.push(detector.observe(&store, &s).unwrap());
            store.append(s);
        }
        (detector, conflicts)
    }

    #[test]
    fn test_opposite_polarity_contradicts() {
        let (detector, conflicts) = feed(&["I like cats.", "I don't like cats."]);
        assert!(detector.is_contradicted());
        assert!(conflicts[1].is_some());
    }

    #[test]
    fn test_same_polarity_is_consistent() {
        let (detector, _) = feed(&["I like cats.", "I like cats.", "I don't like dogs."]);
        assert!(!detector.is_contradicted());
    }

    #[test]
    fn test_predicate_compared_by_infinitive() {
        let (detector, _) = feed(&["Alice likes cats.", "Alice doesn't like cats."]);
        assert!(detector.is_contradicted());
    }

    #[test]
    fn test_missing_objects_match() {
        let (detector, _) = feed(&["Alice runs.", "Alice doesn't run."]);
        assert!(detector.is_contradicted());

        let (detector, _) = feed(&["Alice runs.", "Alice doesn't run home."]);
        assert!(!detector.is_contradicted());
    }

    #[test]
    fn test_all_encompassing_subject() {
        let (detector, _) = feed(&["nobody likes cats.", "Bob likes cats."]);
        assert!(detector.is_contradicted());
    }

    #[test]
    fn test_contradiction_is_sticky() {
        let (detector, conflicts) =
            feed(&["I like cats.", "I don't like cats.", "Alice likes dogs."]);
        assert!(detector.is_contradicted());
        assert!(conflicts[2].is_none());
    }
}
