//! "Who" questions.

use grammar_rules::{Object, Predicate, Subject};

use crate::config::MessageCatalogue;
use crate::formatter::{english_list, join, perspective_swap};
use crate::knowledge_base::{Comparator, FactQuery, FactStore, FieldValue, QueryError};

pub(super) fn answer(
    messages: &MessageCatalogue,
    facts: &FactStore,
    predicate: &Predicate,
    object: Option<&Object>,
) -> Result<String, QueryError> {
    // Negative facts say nothing about who does something, except when the
    // subject is "nobody" (or "everybody").
    let query = FactQuery::new()
        .predicate(Comparator::entity(predicate.clone()))
        .object(Comparator::nullable(object))
        .negation(Comparator::predicate(|negative, statement| {
            statement.is_all_encompassing || negative == FieldValue::Flag(false)
        }));
    let matches = facts.select(&query)?;
    if matches.is_empty() {
        return Ok(messages.who_unknown.clone());
    }

    let object = object.map(ToString::to_string);

    if let Some(fact) = matches
        .iter()
        .find(|fact| fact.statement.subject.is_all_encompassing)
    {
        let subject = &fact.statement.subject;
        return Ok(join([
            Some(subject.text.clone()),
            Some(predicate.conjugate(subject, false)),
            object,
        ]));
    }

    let mut subjects: Vec<Subject> = Vec::new();
    for fact in &matches {
        let subject = perspective_swap(&fact.statement.subject);
        if !subjects.iter().any(|seen| seen.text == subject.text) {
            subjects.push(subject);
        }
    }
    let names: Vec<&str> = subjects.iter().map(|s| s.text.as_str()).collect();

    Ok(join([
        Some(english_list(&names, true)),
        Some(predicate.conjugate_for(&subjects, false)),
        object,
    ]))
}
