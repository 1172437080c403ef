//! Partial-match queries over facts.
//!
//! A [`FactQuery`] pairs statement fields with comparators. A fact matches
//! when every comparator accepts the corresponding field:
//!
//! | comparator      | accepts                                                     |
//! |-----------------|-------------------------------------------------------------|
//! | `Exact`         | a subject, predicate or present object with the same text   |
//! | `EntityEquals`  | an entity of the same kind that matches by its own rules    |
//! | `NullableExact` | an object with the same text, where absent matches absent    |
//! | `Predicate`     | whatever the function returns for the field and its statement |
//!
//! Any other pairing is a bug in the caller and is reported as
//! [`QueryError::IncompatibleComparator`].

use grammar_rules::{Object, Predicate, Statement, Subject};
use std::fmt;
use thiserror::Error;

use super::Fact;

/// The queryable fields of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Subject,
    Predicate,
    Object,
    IsNegative,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Subject => "subject",
            Field::Predicate => "predicate",
            Field::Object => "object",
            Field::IsNegative => "is_negative",
        };
        f.write_str(name)
    }
}

/// A borrowed view of one field of a candidate statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Subject(&'a Subject),
    Predicate(&'a Predicate),
    Object(Option<&'a Object>),
    Flag(bool),
}

impl<'a> FieldValue<'a> {
    fn of(statement: &'a Statement, field: Field) -> Self {
        match field {
            Field::Subject => FieldValue::Subject(&statement.subject),
            Field::Predicate => FieldValue::Predicate(&statement.predicate),
            Field::Object => FieldValue::Object(statement.object.as_ref()),
            Field::IsNegative => FieldValue::Flag(statement.is_negative),
        }
    }
}

/// A word entity to compare against with its own matching rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Subject(Subject),
    Predicate(Predicate),
    Object(Object),
}

impl From<Subject> for Entity {
    fn from(subject: Subject) -> Self {
        Entity::Subject(subject)
    }
}

impl From<Predicate> for Entity {
    fn from(predicate: Predicate) -> Self {
        Entity::Predicate(predicate)
    }
}

impl From<Object> for Entity {
    fn from(object: Object) -> Self {
        Entity::Object(object)
    }
}

type FieldTest = Box<dyn Fn(FieldValue<'_>, &Statement) -> bool>;

pub enum Comparator {
    /// Exact text equality.
    Exact(String),
    /// Entity-level matching: subjects via [`Subject::matches`], predicates
    /// via [`Predicate::matches`], objects by text.
    EntityEquals(Entity),
    /// Object text equality where `None` only matches a missing object.
    NullableExact(Option<String>),
    /// A free-form test that also sees the whole candidate statement.
    Predicate(FieldTest),
}

impl Comparator {
    pub fn exact(text: impl Into<String>) -> Self {
        Comparator::Exact(text.into())
    }

    pub fn entity(entity: impl Into<Entity>) -> Self {
        Comparator::EntityEquals(entity.into())
    }

    pub fn nullable(object: Option<&Object>) -> Self {
        Comparator::NullableExact(object.map(|o| o.text.clone()))
    }

    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(FieldValue<'_>, &Statement) -> bool + 'static,
    {
        Comparator::Predicate(Box::new(test))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Comparator::Exact(_) => "Exact",
            Comparator::EntityEquals(_) => "EntityEquals",
            Comparator::NullableExact(_) => "NullableExact",
            Comparator::Predicate(_) => "Predicate",
        }
    }

    /// Check one field of a candidate statement.
    pub fn accepts(
        &self,
        field: Field,
        statement: &Statement,
    ) -> Result<bool, QueryError> {
        let value = FieldValue::of(statement, field);
        let incompatible = || QueryError::IncompatibleComparator {
            comparator: self.name(),
            field,
        };

        match (self, value) {
            (Comparator::Exact(text), FieldValue::Subject(subject)) => Ok(subject.text == *text),
            (Comparator::Exact(text), FieldValue::Predicate(predicate)) => {
                Ok(predicate.surface == *text)
            }
            (Comparator::Exact(text), FieldValue::Object(object)) => {
                Ok(object.is_some_and(|o| o.text == *text))
            }

            (Comparator::EntityEquals(Entity::Subject(ask)), FieldValue::Subject(got)) => {
                Ok(ask.matches(got))
            }
            (Comparator::EntityEquals(Entity::Predicate(ask)), FieldValue::Predicate(got)) => {
                Ok(ask.matches(got))
            }
            (Comparator::EntityEquals(Entity::Object(ask)), FieldValue::Object(got)) => {
                Ok(got.is_some_and(|o| o.text == ask.text))
            }

            (Comparator::NullableExact(ask), FieldValue::Object(got)) => {
                Ok(ask.as_deref() == got.map(|o| o.text.as_str()))
            }

            (Comparator::Predicate(test), value) => Ok(test(value, statement)),

            _ => Err(incompatible()),
        }
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Exact(text) => f.debug_tuple("Exact").field(text).finish(),
            Comparator::EntityEquals(entity) => f.debug_tuple("EntityEquals").field(entity).finish(),
            Comparator::NullableExact(text) => f.debug_tuple("NullableExact").field(text).finish(),
            Comparator::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("comparator {comparator} cannot be applied to the {field} field")]
    IncompatibleComparator {
        comparator: &'static str,
        field: Field,
    },
}

/// A conjunction of field comparators.
#[derive(Debug, Default)]
pub struct FactQuery {
    clauses: Vec<(Field, Comparator)>,
}

impl FactQuery {
    /// An empty query, which matches every fact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Facts making the same claim: matching subject and predicate, and the
    /// same object or lack of one.
    pub fn same_claim(subject: &Subject, predicate: &Predicate, object: Option<&Object>) -> Self {
        Self::new()
            .subject(Comparator::entity(subject.clone()))
            .predicate(Comparator::entity(predicate.clone()))
            .object(Comparator::nullable(object))
    }

    pub fn with(mut self, field: Field, comparator: Comparator) -> Self {
        self.clauses.push((field, comparator));
        self
    }

    pub fn subject(self, comparator: Comparator) -> Self {
        self.with(Field::Subject, comparator)
    }

    pub fn predicate(self, comparator: Comparator) -> Self {
        self.with(Field::Predicate, comparator)
    }

    pub fn object(self, comparator: Comparator) -> Self {
        self.with(Field::Object, comparator)
    }

    pub fn negation(self, comparator: Comparator) -> Self {
        self.with(Field::IsNegative, comparator)
    }

    pub fn matches(&self, statement: &Statement) -> Result<bool, QueryError> {
        for (field, comparator) in &self.clauses {
            if !comparator.accepts(*field, statement)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The matching facts, in their original order.
    pub fn select<'a, I>(&self, facts: I) -> Result<Vec<&'a Fact>, QueryError>
    where
        I: IntoIterator<Item = &'a Fact>,
    {
        let mut selected = Vec::new();
        for fact in facts {
            if self.matches(&fact.statement)? {
                selected.push(fact);
            }
        }
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::statement;

    #[test]
    fn test_exact_text() {
        let s = statement("Alice runs the school.");
        assert!(Comparator::exact("Alice").accepts(Field::Subject, &s).unwrap());
        assert!(Comparator::exact("runs").accepts(Field::Predicate, &s).unwrap());
        assert!(!Comparator::exact("run").accepts(Field::Predicate, &s).unwrap());
        assert!(Comparator::exact("the school").accepts(Field::Object, &s).unwrap());

        let bare = statement("Alice runs.");
        assert!(!Comparator::exact("the school").accepts(Field::Object, &bare).unwrap());
    }

    #[test]
    fn test_entity_equals() {
        let s = statement("Alice runs the school.");
        let everybody = statement("everybody runs.").subject;
        let run = statement("Bob run.").predicate;

        assert!(Comparator::entity(everybody).accepts(Field::Subject, &s).unwrap());
        assert!(Comparator::entity(run).accepts(Field::Predicate, &s).unwrap());
        assert!(Comparator::entity(Object::new("the school"))
            .accepts(Field::Object, &s)
            .unwrap());
        assert!(!Comparator::entity(Object::new("the school"))
            .accepts(Field::Object, &statement("Alice runs."))
            .unwrap());
    }

    #[test]
    fn test_nullable_exact() {
        let with_object = statement("Alice runs the school.");
        let without_object = statement("Alice runs.");

        assert!(Comparator::nullable(None).accepts(Field::Object, &without_object).unwrap());
        assert!(!Comparator::nullable(None).accepts(Field::Object, &with_object).unwrap());

        let school = Object::new("the school");
        assert!(Comparator::nullable(Some(&school))
            .accepts(Field::Object, &with_object)
            .unwrap());
        assert!(!Comparator::nullable(Some(&school))
            .accepts(Field::Object, &without_object)
            .unwrap());
    }

    #[test]
    fn test_predicate_sees_statement() {
        let s = statement("nobody runs.");
        let comparator = Comparator::predicate(|value, statement| {
            statement.is_all_encompassing && value == FieldValue::Flag(true)
        });
        assert!(comparator.accepts(Field::IsNegative, &s).unwrap());
    }

    #[test]
    fn test_incompatible_comparators() {
        let s = statement("Alice runs.");

        let err = Comparator::exact("true").accepts(Field::IsNegative, &s).unwrap_err();
        assert_eq!(
            err,
            QueryError::IncompatibleComparator {
                comparator: "Exact",
                field: Field::IsNegative,
            }
        );

        let alice = s.subject.clone();
        assert!(Comparator::entity(alice).accepts(Field::Predicate, &s).is_err());
        assert!(Comparator::nullable(None).accepts(Field::Subject, &s).is_err());
    }

    #[test]
    fn test_query_conjunction() {
        let facts = [
            crate::Fact::new(statement("Alice runs the school.")),
            crate::Fact::new(statement("Bob runs the store.")),
            crate::Fact::new(statement("Alice runs the store.")),
        ];

        let store = Object::new("the store");
        let query = FactQuery::new()
            .predicate(Comparator::entity(statement("x run.").predicate))
            .object(Comparator::nullable(Some(&store)));

        let selected = query.select(&facts).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].statement.subject.text, "Bob");
        assert_eq!(selected[1].statement.subject.text, "Alice");

        assert_eq!(FactQuery::new().select(&facts).unwrap().len(), 3);
    }
}
