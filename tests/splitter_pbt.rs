//! Property tests for the statement splitter.
//!
//! Invariants exercised:
//! - An input without separators or quotes splits to its trimmed self.
//! - Blank input splits to nothing.
//! - Joining split output with "; " and re-splitting is a fixed point for
//!   quote-free statements.

use proptest::prelude::*;

use cql_console::core::splitter::split_statements;

fn arb_plain_statement() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_ =<>*,.()]{1,40}".prop_filter("non-blank", |s| !s.trim().is_empty())
}

proptest! {
    #[test]
    fn plain_text_splits_to_its_trimmed_self(statement in arb_plain_statement()) {
        let split = split_statements(&statement);
        prop_assert_eq!(split, vec![statement.trim().to_string()]);
    }

    #[test]
    fn blank_input_splits_to_nothing(blank in "[ \t\r\n]{0,10}") {
        prop_assert!(split_statements(&blank).is_empty());
    }

    #[test]
    fn join_then_resplit_is_a_fixed_point(statements in prop::collection::vec(arb_plain_statement(), 0..8)) {
        let trimmed: Vec<String> = statements
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        let joined = trimmed.join("; ");
        let split = split_statements(&joined);
        prop_assert_eq!(split.clone(), trimmed);

        let rejoined = split.join("; ");
        prop_assert_eq!(split_statements(&rejoined), split);
    }
}
