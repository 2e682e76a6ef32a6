use wce_diagnostic::DiagnosticCollector;
use wce_ir::TokenKind;
use wce_lexer::Tokenizer;

use super::Cursor;

#[test]
fn unknown_tokens_are_skipped() {
    let mut diags = DiagnosticCollector::new();
    let mut cursor = Cursor::new(Tokenizer::new("@ a # ! b", "t", &mut diags));

    assert_eq!(cursor.advance().text, "a");
    assert_eq!(cursor.advance().text, "b");
    assert!(cursor.is_at_end());
    assert_eq!(cursor.diagnostics().error_count(), 3);
}

#[test]
fn advance_at_eof_is_a_no_op() {
    let mut diags = DiagnosticCollector::new();
    let mut cursor = Cursor::new(Tokenizer::new("x", "t", &mut diags));
    cursor.advance();
    let consumed = cursor.consumed();

    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.consumed(), consumed);
}

#[test]
fn eat_only_matches_requested_kind() {
    let mut diags = DiagnosticCollector::new();
    let mut cursor = Cursor::new(Tokenizer::new("( )", "t", &mut diags));

    assert!(!cursor.eat(TokenKind::RParen));
    assert!(cursor.eat(TokenKind::LParen));
    assert!(cursor.check(TokenKind::RParen));
}

#[test]
fn span_from_covers_consumed_tokens() {
    let mut diags = DiagnosticCollector::new();
    let mut cursor = Cursor::new(Tokenizer::new("foo(1, 2) x", "t", &mut diags));
    let start = cursor.current().span;
    for _ in 0..6 {
        cursor.advance();
    }
    let span = cursor.span_from(start);
    assert_eq!((span.start, span.end), (0, 9));
}
