//! Property tests for the tokenizer.
//!
//! Arbitrary input must always tokenize to completion: every call makes
//! progress, spans stay inside the source, and the stream ends in `Eof`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use wce_diagnostic::DiagnosticCollector;
use wce_ir::TokenKind;
use wce_lexer::tokenize;

fn dsl_like() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-z_ (){};,+\-*/=<>!"0-9.\n\\@]{0,120}"#).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn tokenizing_terminates_with_eof(source in any::<String>()) {
        let mut diags = DiagnosticCollector::new();
        let tokens = tokenize(&source, "prop.wce", &mut diags);

        prop_assert!(tokens.len() <= source.len() + 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(source in dsl_like()) {
        let mut diags = DiagnosticCollector::new();
        let tokens = tokenize(&source, "prop.wce", &mut diags);

        let mut last_end = 0;
        for token in &tokens {
            let range = token.span.to_range();
            prop_assert!(range.start >= last_end);
            prop_assert!(range.end <= source.len());
            prop_assert!(source.get(range.clone()).is_some());
            last_end = range.end;
        }
    }

    #[test]
    fn one_diagnostic_per_unknown_token(source in dsl_like()) {
        let mut diags = DiagnosticCollector::new();
        let tokens = tokenize(&source, "prop.wce", &mut diags);

        let unknown = tokens.iter().filter(|t| t.kind == TokenKind::Unknown).count();
        prop_assert_eq!(unknown, diags.error_count());
    }

    #[test]
    fn identifiers_round_trip(name in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
        prop_assume!(!matches!(name.as_str(), "wce_if" | "wce_else" | "wce_for"));
        let mut diags = DiagnosticCollector::new();
        let tokens = tokenize(&name, "prop.wce", &mut diags);

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(tokens[0].text, name.as_str());
    }
}
