//! Verbs.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Subject, Word};

/// The verb of a clause.
///
/// Verbs are compared by their infinitive, which here is nothing more than
/// the written form with one trailing "s" removed. There is no handling of
/// irregular verbs: "runs" and "run" match, "cross" becomes "cros".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    pub surface: String,
    pub infinitive: String,
}

impl Predicate {
    pub fn parse(word: &Word) -> Self {
        let surface = word.text.clone();
        let infinitive = surface.strip_suffix('s').unwrap_or(&surface).to_string();
        Self { surface, infinitive }
    }

    pub fn matches(&self, other: &Predicate) -> bool {
        self.infinitive == other.infinitive
    }

    /// Conjugate in the simple present for a single subject.
    pub fn conjugate(&self, subject: &Subject, negative: bool) -> String {
        if subject.uses_do || negative {
            self.infinitive.clone()
        } else {
            format!("{}s", self.infinitive)
        }
    }

    /// Conjugate for a group of subjects. More than one subject takes the
    /// plural form.
    pub fn conjugate_for(&self, subjects: &[Subject], negative: bool) -> String {
        match subjects {
            [single] => self.conjugate(single, negative),
            _ => self.infinitive.clone(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lexicon;

    fn verb(text: &str) -> Predicate {
        Predicate::parse(&Word::new(text))
    }

    fn subject(text: &str) -> Subject {
        Subject::parse(&Word::new(text), &Lexicon::default())
    }

    #[test]
    fn test_infinitive() {
        assert_eq!(verb("runs").infinitive, "run");
        assert_eq!(verb("run").infinitive, "run");
        assert_eq!(verb("cross").infinitive, "cros");
        assert_eq!(verb("runs").to_string(), "runs");
    }

    #[test]
    fn test_matches_by_infinitive() {
        assert!(verb("runs").matches(&verb("run")));
        assert!(!verb("runs").matches(&verb("ran")));
    }

    #[test]
    fn test_conjugate_single() {
        assert_eq!(verb("like").conjugate(&subject("Alice"), false), "likes");
        assert_eq!(verb("likes").conjugate(&subject("you"), false), "like");
        assert_eq!(verb("likes").conjugate(&subject("Alice"), true), "like");
    }

    #[test]
    fn test_conjugate_group() {
        let alice = subject("Alice");
        let bob = subject("Bob");
        assert_eq!(verb("run").conjugate_for(&[alice.clone()], false), "runs");
        assert_eq!(verb("runs").conjugate_for(&[alice, bob], false), "run");
        assert_eq!(verb("runs").conjugate_for(&[], false), "run");
    }
}
