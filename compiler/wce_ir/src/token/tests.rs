use super::*;

#[test]
fn count_covers_every_kind() {
    assert_eq!(TokenKind::COUNT, 25);
    assert_eq!(TokenKind::Eof as usize, 0);
}

#[test]
fn keywords_are_flagged() {
    assert!(TokenKind::KwIf.is_keyword());
    assert!(TokenKind::KwElse.is_keyword());
    assert!(TokenKind::KwFor.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
}

#[test]
fn display_includes_text_for_valued_tokens() {
    let ident = Token::new(TokenKind::Identifier, "row", Span::new(0, 3), Position::START);
    assert_eq!(ident.to_string(), "identifier `row`");

    let string = Token::new(TokenKind::String, "hi", Span::new(0, 4), Position::START);
    assert_eq!(string.to_string(), "string \"hi\"");

    let paren = Token::new(TokenKind::LParen, "(", Span::new(0, 1), Position::START);
    assert_eq!(paren.to_string(), "'('");
}
