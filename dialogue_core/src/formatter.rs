//! Text rendering helpers shared by the answer algorithms.

use grammar_rules::Subject;

/// Join the present parts with single spaces and end the sentence with a
/// period.
pub fn join<I, T>(parts: I) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: ToString,
{
    let words: Vec<String> = parts.into_iter().flatten().map(|p| p.to_string()).collect();
    format!("{}.", words.join(" "))
}

/// Render items as an English list: "a", "a and b", "a, b and c".
///
/// With `oxford_comma` the last item is introduced by ", and " instead.
pub fn english_list<S: AsRef<str>>(items: &[S], oxford_comma: bool) -> String {
    match items {
        [] => String::new(),
        [single] => single.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|item| item.as_ref()).collect();
            let conjunction = if oxford_comma { ", and " } else { " and " };
            format!("{}{}{}", head.join(", "), conjunction, last.as_ref())
        }
    }
}

/// Swap "I" and "you" so an answer speaks back to the asker.
pub fn perspective_swap(subject: &Subject) -> Subject {
    match subject.text.as_str() {
        "I" => subject.renamed("you"),
        "you" => subject.renamed("I"),
        _ => subject.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::statement;

    #[test]
    fn test_join_skips_missing_parts() {
        assert_eq!(join([Some("yes,"), Some("you"), None, Some("code")]), "yes, you code.");
        assert_eq!(join::<_, &str>([None, None]), ".");
    }

    #[test]
    fn test_english_list() {
        assert_eq!(english_list(&["cats"], true), "cats");
        assert_eq!(english_list(&["cats", "dogs"], false), "cats and dogs");
        assert_eq!(english_list(&["cats", "dogs"], true), "cats, and dogs");
        assert_eq!(english_list(&["a", "b", "c"], false), "a, b and c");
        assert_eq!(english_list(&["a", "b", "c"], true), "a, b, and c");
        assert_eq!(english_list::<&str>(&[], true), "");
    }

    #[test]
    fn test_perspective_swap() {
        let me = statement("I like cats.").subject;
        let you = perspective_swap(&me);
        assert_eq!(you.text, "you");
        assert!(you.uses_do);
        assert_eq!(perspective_swap(&you).text, "I");

        let alice = statement("Alice likes cats.").subject;
        assert_eq!(perspective_swap(&alice), alice);

        let lower = statement("i like cats.").subject;
        assert_eq!(perspective_swap(&lower).text, "i");
    }
}
