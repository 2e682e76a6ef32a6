use super::*;

// === Basic Navigation ===

#[test]
fn current_and_peek() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn reads_zero_past_end() {
    let mut cursor = Cursor::new("a");
    assert_eq!(cursor.peek(), 0);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Line Tracking ===

#[test]
fn newline_resets_column() {
    let mut cursor = Cursor::new("ab\ncd");
    for _ in 0..3 {
        cursor.advance();
    }
    assert_eq!(cursor.position(), Position::new(2, 1));
    cursor.advance();
    assert_eq!(cursor.position(), Position::new(2, 2));
}

#[test]
fn eat_while_counts_columns() {
    let mut cursor = Cursor::new("abc1 x");
    cursor.eat_while(|b| b.is_ascii_alphanumeric());
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.position(), Position::new(1, 5));
    assert_eq!(cursor.slice_from(0), "abc1");
}

#[test]
fn advance_char_steps_over_multibyte() {
    let mut cursor = Cursor::new("é!");
    assert_eq!(cursor.current_char(), Some('é'));
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'!');
}

// === memchr Scanning ===

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("// note\nx");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.position(), Position::new(1, 8));
}

#[test]
fn eat_until_newline_reaches_eof() {
    let mut cursor = Cursor::new("// trailing");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn string_delim_finds_quote_escape_and_newline() {
    let mut cursor = Cursor::new("abc\"");
    assert_eq!(cursor.skip_to_string_delim(), Some(b'"'));
    assert_eq!(cursor.pos(), 3);

    let mut cursor = Cursor::new("a\\\"b");
    assert_eq!(cursor.skip_to_string_delim(), Some(b'\\'));

    let mut cursor = Cursor::new("ab\ncd");
    assert_eq!(cursor.skip_to_string_delim(), Some(b'\n'));

    let mut cursor = Cursor::new("never closed");
    assert_eq!(cursor.skip_to_string_delim(), None);
    assert!(cursor.is_eof());
}
