//! Pull-based tokenizer.
//!
//! Each call to [`Tokenizer::next_token`] skips trivia and then classifies
//! the next lexeme in this order: end of input, identifier/keyword,
//! number, string, symbol. Anything else is reported as an unexpected
//! character and yields [`TokenKind::Unknown`].

use std::iter::FusedIterator;

use tracing::trace;
use wce_diagnostic::{DiagnosticCollector, ErrorCode};
use wce_ir::{Position, Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::keywords;

/// Tokenizer over one source buffer.
///
/// Holds the compilation's diagnostic collector for its whole lifetime;
/// the parser reaches it through [`Tokenizer::diagnostics`] so both stages
/// write into one ordered list.
pub struct Tokenizer<'a, 'd> {
    cursor: Cursor<'a>,
    file_name: &'a str,
    diagnostics: &'d mut DiagnosticCollector,
    /// Set once `Eof` has been yielded through `Iterator`.
    done: bool,
}

impl<'a, 'd> Tokenizer<'a, 'd> {
    pub fn new(
        source: &'a str,
        file_name: &'a str,
        diagnostics: &'d mut DiagnosticCollector,
    ) -> Self {
        Tokenizer {
            cursor: Cursor::new(source),
            file_name,
            diagnostics,
            done: false,
        }
    }

    #[inline]
    pub fn file_name(&self) -> &'a str {
        self.file_name
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// The collector lexical errors go to.
    #[inline]
    pub fn diagnostics(&mut self) -> &mut DiagnosticCollector {
        self.diagnostics
    }

    /// Produce the next token. Returns `Eof` forever once input runs out.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_trivia();

        let start = self.cursor.pos();
        let pos = self.cursor.position();

        let token = if self.cursor.is_eof() {
            Token::new(TokenKind::Eof, "", Span::from_offsets(start, start), pos)
        } else {
            match self.cursor.current() {
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start, pos),
                b'0'..=b'9' => self.number(start, pos),
                b'"' => self.string(start, pos),
                byte => self.symbol(start, pos, byte),
            }
        };

        trace!(
            kind = ?token.kind,
            text = token.text,
            line = token.pos.line,
            column = token.pos.column,
            "token"
        );
        token
    }

    /// Skip whitespace and `//` line comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' | b'\n' => self.cursor.advance(),
                b'/' if self.cursor.peek() == b'/' => self.cursor.eat_until_newline_or_eof(),
                _ => return,
            }
        }
    }

    fn identifier(&mut self, start: usize, pos: Position) -> Token<'a> {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.cursor.slice_from(start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.finish(kind, start, pos)
    }

    /// `digits ('.' digits)?`. A dot without a digit after it is left alone.
    fn number(&mut self, start: usize, pos: Position) -> Token<'a> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        self.finish(TokenKind::Number, start, pos)
    }

    /// String literal. The token's text is the content between the quotes;
    /// a backslash escapes whatever follows it.
    fn string(&mut self, start: usize, pos: Position) -> Token<'a> {
        self.cursor.advance();
        let content_start = self.cursor.pos();

        loop {
            match self.cursor.skip_to_string_delim() {
                Some(b'"') => {
                    let text = self.cursor.slice_from(content_start);
                    self.cursor.advance();
                    let span = Span::from_offsets(start, self.cursor.pos());
                    return Token::new(TokenKind::String, text, span, pos);
                }
                Some(b'\\') => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                Some(_) => self.cursor.advance(),
                None => {
                    self.report(pos, ErrorCode::UnterminatedString, "Unterminated string literal");
                    return self.finish(TokenKind::Unknown, start, pos);
                }
            }
        }
    }

    fn symbol(&mut self, start: usize, pos: Position, byte: u8) -> Token<'a> {
        let kind = match byte {
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'=' => self.with_equal(TokenKind::Assign, TokenKind::EqEq),
            b'<' => self.with_equal(TokenKind::Lt, TokenKind::LtEq),
            b'>' => self.with_equal(TokenKind::Gt, TokenKind::GtEq),
            b'!' if self.cursor.peek() == b'=' => {
                self.cursor.advance();
                self.cursor.advance();
                TokenKind::NotEq
            }
            _ => return self.unexpected(start, pos),
        };
        self.finish(kind, start, pos)
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `one`, or `two` when immediately followed by `=`.
    #[inline]
    fn with_equal(&mut self, one: TokenKind, two: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            two
        } else {
            one
        }
    }

    fn unexpected(&mut self, start: usize, pos: Position) -> Token<'a> {
        let ch = self.cursor.current_char().unwrap_or('\0');
        self.cursor.advance_char();
        self.report(
            pos,
            ErrorCode::UnexpectedCharacter,
            format!("Unexpected character '{ch}'"),
        );
        self.finish(TokenKind::Unknown, start, pos)
    }

    #[inline]
    fn finish(&self, kind: TokenKind, start: usize, pos: Position) -> Token<'a> {
        let end = self.cursor.pos();
        Token::new(
            kind,
            self.cursor.slice(start, end),
            Span::from_offsets(start, end),
            pos,
        )
    }

    fn report(&mut self, pos: Position, code: ErrorCode, message: impl Into<String>) {
        self.diagnostics
            .error(Some(self.file_name), pos, code, message);
    }
}

impl<'a> Iterator for Tokenizer<'a, '_> {
    type Item = Token<'a>;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token<'a>> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        self.done = token.kind == TokenKind::Eof;
        Some(token)
    }
}

impl FusedIterator for Tokenizer<'_, '_> {}

#[cfg(test)]
mod tests;
