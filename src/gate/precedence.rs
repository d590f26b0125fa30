//! Rule ordering.

use crate::jobs::Job;
use crate::rules::Rule;

/// Orders rules by ascending precedence, keeping declaration order for ties.
///
/// Lists of zero or one rule are returned untouched.
pub fn sort_by_precedence<J: Job>(mut rules: Vec<Rule<J>>) -> Vec<Rule<J>> {
    if rules.len() > 1 {
        rules.sort_by_key(Rule::precedence);
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Job for Probe {
        type Args = ();

        fn name(&self) -> &str {
            "probe"
        }
    }

    fn rule(name: &'static str, precedence: i32) -> Rule<Probe> {
        Rule::max(1, || 0)
            .with_name(name)
            .with_precedence(precedence)
    }

    fn names(rules: &[Rule<Probe>]) -> Vec<&str> {
        rules.iter().map(Rule::name).collect()
    }

    #[test]
    fn single_rule_is_returned_unchanged() {
        let sorted = sort_by_precedence(vec![rule("only", 7)]);
        assert_eq!(names(&sorted), ["only"]);
        assert!(sort_by_precedence(Vec::<Rule<Probe>>::new()).is_empty());
    }

    #[test]
    fn lowest_precedence_comes_first() {
        let sorted = sort_by_precedence(vec![rule("b", 2), rule("a", 1)]);
        assert_eq!(sorted[0].precedence(), 1);
        assert_eq!(names(&sorted), ["a", "b"]);
    }

    #[test]
    fn ties_keep_declaration_order() {
        let sorted = sort_by_precedence(vec![
            rule("x", 1),
            rule("first", 0),
            rule("y", 1),
            rule("second", 0),
            rule("z", 1),
        ]);
        assert_eq!(names(&sorted), ["first", "second", "x", "y", "z"]);
    }

    #[test]
    fn negative_precedence_sorts_before_default() {
        let sorted = sort_by_precedence(vec![rule("default", 0), rule("urgent", -5)]);
        assert_eq!(names(&sorted), ["urgent", "default"]);
    }
}
