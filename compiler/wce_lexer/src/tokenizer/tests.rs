use pretty_assertions::assert_eq;
use wce_diagnostic::{DiagnosticCollector, ErrorCode};
use wce_ir::{Position, TokenKind};
use TokenKind as K;

use crate::tokenize;

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut diags = DiagnosticCollector::new();
    tokenize(source, "test.wce", &mut diags)
        .iter()
        .map(|t| t.kind)
        .collect()
}

fn lex_with_diags(source: &str) -> (Vec<(TokenKind, String)>, DiagnosticCollector) {
    let mut diags = DiagnosticCollector::new();
    let tokens = tokenize(source, "test.wce", &mut diags)
        .iter()
        .map(|t| (t.kind, t.text.to_string()))
        .collect();
    (tokens, diags)
}

// === Sequences ===

#[test]
fn conditional_container_sequence() {
    let (tokens, diags) = lex_with_diags(r#"wce_if (a == 1) { text("x"); }"#);
    let expected: Vec<(TokenKind, String)> = [
        (K::KwIf, "wce_if"),
        (K::LParen, "("),
        (K::Identifier, "a"),
        (K::EqEq, "=="),
        (K::Number, "1"),
        (K::RParen, ")"),
        (K::LBrace, "{"),
        (K::Identifier, "text"),
        (K::LParen, "("),
        (K::String, "x"),
        (K::RParen, ")"),
        (K::Semicolon, ";"),
        (K::RBrace, "}"),
        (K::Eof, ""),
    ]
    .into_iter()
    .map(|(k, t)| (k, t.to_string()))
    .collect();

    assert_eq!(tokens, expected);
    assert!(diags.is_empty());
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds(" \t\r\n  "), vec![TokenKind::Eof]);
}

#[test]
fn eof_repeats() {
    let mut diags = DiagnosticCollector::new();
    let mut tokenizer = crate::Tokenizer::new("x", "t", &mut diags);
    assert_eq!(tokenizer.next_token().kind, TokenKind::Identifier);
    assert_eq!(tokenizer.next_token().kind, TokenKind::Eof);
    assert_eq!(tokenizer.next_token().kind, TokenKind::Eof);
}

#[test]
fn iterator_stops_after_first_eof() {
    let mut diags = DiagnosticCollector::new();
    let tokenizer = crate::Tokenizer::new("a b", "t", &mut diags);
    assert_eq!(tokenizer.count(), 3);
}

// === Operators ===

#[test]
fn two_char_operators_are_greedy() {
    assert_eq!(
        kinds("== != <= >= = < > + - * /"),
        vec![
            K::EqEq,
            K::NotEq,
            K::LtEq,
            K::GtEq,
            K::Assign,
            K::Lt,
            K::Gt,
            K::Plus,
            K::Minus,
            K::Star,
            K::Slash,
            K::Eof
        ]
    );
}

#[test]
fn adjacent_operators_split_correctly() {
    assert_eq!(kinds("a<=b"), vec![K::Identifier, K::LtEq, K::Identifier, K::Eof]);
    assert_eq!(kinds("==="), vec![K::EqEq, K::Assign, K::Eof]);
}

#[test]
fn lone_bang_is_unexpected() {
    let (tokens, diags) = lex_with_diags("a ! b");
    assert_eq!(tokens[1].0, TokenKind::Unknown);
    assert_eq!(diags.len(), 1);
    let diag = &diags.as_slice()[0];
    assert_eq!(diag.code, ErrorCode::UnexpectedCharacter);
    assert_eq!(diag.message(), "Unexpected character '!'");
    assert_eq!(diag.pos, Position::new(1, 3));
}

// === Identifiers and Keywords ===

#[test]
fn keywords_need_exact_spelling() {
    assert_eq!(
        kinds("wce_if wce_else wce_for wce_iffy if for _x9"),
        vec![
            K::KwIf,
            K::KwElse,
            K::KwFor,
            K::Identifier,
            K::Identifier,
            K::Identifier,
            K::Identifier,
            K::Eof
        ]
    );
}

// === Numbers ===

#[test]
fn numbers_with_and_without_fraction() {
    let (tokens, _) = lex_with_diags("42 3.14 7.");
    assert_eq!(tokens[0], (TokenKind::Number, "42".to_string()));
    assert_eq!(tokens[1], (TokenKind::Number, "3.14".to_string()));
    assert_eq!(tokens[2], (TokenKind::Number, "7".to_string()));
    // The trailing dot is not part of the number.
    assert_eq!(tokens[3].0, TokenKind::Unknown);
}

// === Strings ===

#[test]
fn string_text_excludes_quotes() {
    let mut diags = DiagnosticCollector::new();
    let tokens = tokenize(r#"  "hello""#, "t", &mut diags);
    assert_eq!(tokens[0].text, "hello");
    assert_eq!(tokens[0].span.start, 2);
    assert_eq!(tokens[0].span.end, 9);
    assert_eq!(tokens[0].pos, Position::new(1, 3));
}

#[test]
fn escaped_quote_does_not_terminate() {
    let (tokens, diags) = lex_with_diags(r#""say \"hi\"" x"#);
    assert_eq!(tokens[0], (TokenKind::String, r#"say \"hi\""#.to_string()));
    assert_eq!(tokens[1].0, TokenKind::Identifier);
    assert!(diags.is_empty());
}

#[test]
fn multiline_string_advances_line() {
    let mut diags = DiagnosticCollector::new();
    let tokens = tokenize("\"a\nb\" c", "t", &mut diags);
    assert_eq!(tokens[0].text, "a\nb");
    assert_eq!(tokens[1].pos, Position::new(2, 4));
}

#[test]
fn unterminated_string_reports_once_and_terminates() {
    let (tokens, diags) = lex_with_diags("\"abc");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].0, TokenKind::Unknown);
    assert_eq!(tokens[1].0, TokenKind::Eof);

    assert_eq!(diags.len(), 1);
    let diag = &diags.as_slice()[0];
    assert_eq!(diag.code, ErrorCode::UnterminatedString);
    assert_eq!(diag.code.number(), 2);
    assert_eq!(diag.pos, Position::new(1, 1));
    assert_eq!(diag.file_name(), "test.wce");
}

#[test]
fn unterminated_string_position_is_opening_quote() {
    let (_, diags) = lex_with_diags("text(\n  \"oops);");
    assert_eq!(diags.as_slice()[0].pos, Position::new(2, 3));
}

// === Trivia ===

#[test]
fn line_comments_are_skipped() {
    assert_eq!(
        kinds("a // comment ) ;\nb / c // end"),
        vec![K::Identifier, K::Identifier, K::Slash, K::Identifier, K::Eof]
    );
}

#[test]
fn positions_track_lines_and_columns() {
    let mut diags = DiagnosticCollector::new();
    let tokens = tokenize("row() {\n    text(\"A\");\n}", "t", &mut diags);
    let text = tokens.iter().find(|t| t.text == "text").map(|t| t.pos);
    assert_eq!(text, Some(Position::new(2, 5)));
    let close = tokens.iter().find(|t| t.kind == TokenKind::RBrace).map(|t| t.pos);
    assert_eq!(close, Some(Position::new(3, 1)));
}

// === Unexpected Characters ===

#[test]
fn unexpected_characters_become_unknown() {
    let (tokens, diags) = lex_with_diags("a @ # é b");
    let unknown = tokens.iter().filter(|t| t.0 == TokenKind::Unknown).count();
    assert_eq!(unknown, 3);
    assert_eq!(diags.error_count(), 3);
    assert_eq!(diags.as_slice()[2].message(), "Unexpected character 'é'");
    assert_eq!(tokens.last().map(|t| t.0), Some(TokenKind::Eof));
}
