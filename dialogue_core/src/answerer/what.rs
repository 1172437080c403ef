//! "What" questions.

use grammar_rules::{Object, Predicate, Statement, Subject};

use crate::config::MessageCatalogue;
use crate::formatter::{english_list, join, perspective_swap};
use crate::knowledge_base::{Comparator, FactQuery, FactStore, QueryError};

/// Every fact about the subject, whatever verb the question used.
pub(super) fn answer(
    messages: &MessageCatalogue,
    facts: &FactStore,
    subject: &Subject,
) -> Result<String, QueryError> {
    let addressee = perspective_swap(subject);
    let matches = facts.select(&FactQuery::new().subject(Comparator::entity(subject.clone())))?;

    let mut seen: Vec<(&Predicate, Option<&Object>)> = Vec::new();
    let mut clauses = Vec::new();
    for fact in matches {
        let statement = &fact.statement;
        let object = statement.object.as_ref();
        let repeated = seen
            .iter()
            .any(|(predicate, other)| predicate.matches(&statement.predicate) && *other == object);
        if repeated {
            continue;
        }
        seen.push((&statement.predicate, object));
        clauses.push(clause(&addressee, statement));
    }

    if clauses.is_empty() {
        return Ok(messages.what_unknown.clone());
    }

    Ok(join([
        Some(addressee.to_string()),
        Some(english_list(&clauses, true)),
    ]))
}

/// "like cats", "don't like dogs", "runs"
fn clause(addressee: &Subject, statement: &Statement) -> String {
    let mut clause = String::new();
    if statement.is_negative {
        clause.push_str(addressee.agree(true));
        clause.push(' ');
    }
    clause.push_str(
        &statement
            .predicate
            .conjugate(addressee, statement.is_negative),
    );
    if let Some(object) = &statement.object {
        clause.push(' ');
        clause.push_str(&object.text);
    }
    clause
}
