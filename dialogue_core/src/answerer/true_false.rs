//! Yes/no questions.

use grammar_rules::{Object, Predicate, Subject};

use crate::config::MessageCatalogue;
use crate::formatter::{join, perspective_swap};
use crate::knowledge_base::{FactQuery, FactStore, QueryError};

/// Later facts override earlier ones, so only the most recent matching
/// fact is consulted.
pub(super) fn answer(
    messages: &MessageCatalogue,
    facts: &FactStore,
    subject: &Subject,
    predicate: &Predicate,
    object: Option<&Object>,
) -> Result<String, QueryError> {
    let matches = facts.select(&FactQuery::same_claim(subject, predicate, object))?;
    let Some(latest) = matches.last() else {
        return Ok(messages.true_false_unknown.clone());
    };

    let addressee = perspective_swap(subject).to_string();
    let object = object.map(ToString::to_string);

    let answer = if latest.statement.is_negative {
        join([
            Some("no,".to_string()),
            Some(addressee),
            Some(subject.agree(true).to_string()),
            Some(predicate.conjugate(subject, true)),
            object,
        ])
    } else {
        join([
            Some("yes,".to_string()),
            Some(addressee),
            Some(predicate.conjugate(subject, false)),
            object,
        ])
    };
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use crate::test_support::ask;

    #[test]
    fn test_affirmative() {
        assert_eq!(
            ask(&["I code in Python."], "Do I code in Python?"),
            "yes, you code in Python."
        );
        assert_eq!(
            ask(&["Alice runs the school."], "Does Alice run the school?"),
            "yes, Alice runs the school."
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(
            ask(&["you don't like cats."], "Do you like cats?"),
            "no, I don't like cats."
        );
        assert_eq!(
            ask(&["Alice doesn't run."], "Does Alice run?"),
            "no, Alice doesn't run."
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(ask(&[], "Do I code in Python?"), "maybe.");
        assert_eq!(ask(&["I code in Rust."], "Do I code in Python?"), "maybe.");
        assert_eq!(ask(&["I code in Python."], "Do I code?"), "maybe.");
    }

    #[test]
    fn test_latest_fact_wins() {
        assert_eq!(
            ask(&["nobody likes cats.", "I like cats."], "Do I like cats?"),
            "yes, you like cats."
        );
        assert_eq!(
            ask(&["I like cats.", "nobody likes cats."], "Do I like cats?"),
            "no, you don't like cats."
        );
    }

    #[test]
    fn test_everybody_answers_for_anyone() {
        assert_eq!(
            ask(&["everybody likes cake."], "Does Bob like cake?"),
            "yes, Bob likes cake."
        );
    }
}
