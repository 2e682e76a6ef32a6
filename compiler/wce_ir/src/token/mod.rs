//! Lexical tokens.
//!
//! A [`Token`] borrows its text from the source buffer; nothing is copied
//! until the parser moves names and literals into the [`Arena`](crate::Arena).

use std::fmt;

use crate::{Position, Span};

/// Token tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    /// End of input. Returned repeatedly once reached.
    Eof,
    /// Marker for malformed input that was already diagnosed.
    Unknown,

    // Literals
    Identifier,
    String,
    Number,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Keywords
    KwIf,
    KwElse,
    KwFor,
}

impl TokenKind {
    /// Number of variants, used to size token sets.
    pub const COUNT: usize = TokenKind::KwFor as usize + 1;

    /// Human-readable name for dumps and messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Unknown => "unknown",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Assign => "'='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::LtEq => "'<='",
            TokenKind::GtEq => "'>='",
            TokenKind::KwIf => "wce_if",
            TokenKind::KwElse => "wce_else",
            TokenKind::KwFor => "wce_for",
        }
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::KwIf | TokenKind::KwElse | TokenKind::KwFor)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with a borrowed view of its source text.
///
/// For `String` tokens `text` is the content between the quotes, escape
/// sequences left exactly as written. `span` always covers the full lexeme,
/// quotes included.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
    pub pos: Position,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span, pos: Position) -> Self {
        Token {
            kind,
            text,
            span,
            pos,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number => {
                write!(f, "{} `{}`", self.kind, self.text)
            }
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            kind => write!(f, "{kind}"),
        }
    }
}

#[cfg(test)]
mod tests;
