use wce_diagnostic::DiagnosticCollector;
use wce_ir::TokenKind;
use wce_lexer::Tokenizer;

use super::{synchronize, RecoveryState, TokenSet, STMT_BOUNDARY};
use crate::cursor::Cursor;

#[test]
fn token_set_membership() {
    const SET: TokenSet = TokenSet::new().with(TokenKind::Comma).with(TokenKind::KwFor);

    assert!(SET.contains(TokenKind::Comma));
    assert!(SET.contains(TokenKind::KwFor));
    assert!(!SET.contains(TokenKind::Eof));
    assert!(TokenSet::new().is_empty());
    assert!(SET.union(STMT_BOUNDARY).contains(TokenKind::RBrace));
}

#[test]
fn synchronize_consumes_through_semicolon() {
    let mut diags = DiagnosticCollector::new();
    let mut cursor = Cursor::new(Tokenizer::new("a b c; d", "t", &mut diags));
    let mut state = RecoveryState::Recovering;

    assert_eq!(synchronize(&mut cursor, &mut state), 4);
    assert_eq!(state, RecoveryState::Normal);
    assert_eq!(cursor.current().text, "d");
}

#[test]
fn synchronize_stops_before_rbrace() {
    let mut diags = DiagnosticCollector::new();
    let mut cursor = Cursor::new(Tokenizer::new("a b } c", "t", &mut diags));
    let mut state = RecoveryState::Recovering;

    assert_eq!(synchronize(&mut cursor, &mut state), 2);
    assert!(cursor.check(TokenKind::RBrace));
}

#[test]
fn synchronize_stops_at_eof() {
    let mut diags = DiagnosticCollector::new();
    let mut cursor = Cursor::new(Tokenizer::new("a ( b", "t", &mut diags));
    let mut state = RecoveryState::Recovering;

    synchronize(&mut cursor, &mut state);
    assert!(cursor.is_at_end());
    assert!(!state.is_recovering());
}
