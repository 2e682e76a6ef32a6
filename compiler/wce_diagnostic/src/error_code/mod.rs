//! Numeric error codes.
//!
//! Numbers are part of the tool's external contract (scripts grep for
//! `WCE105`), so every variant pins its value explicitly.

use std::fmt;
use std::str::FromStr;

/// Broad phase a code belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    /// Malformed token (1-99).
    Lexical,
    /// Grammar violation (100-199).
    Syntax,
    /// Meaning-level problem (200-299, plus the legacy 300).
    Semantic,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::Lexical => "lexical",
            ErrorCategory::Syntax => "syntax",
            ErrorCategory::Semantic => "semantic",
        })
    }
}

/// Every diagnostic code the compiler can emit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u16)]
pub enum ErrorCode {
    // Lexical (1-99)
    UnexpectedCharacter = 1,
    UnterminatedString = 2,

    // Syntax (100-199)
    ExpectedRBrace = 101,
    ExpectedRParen = 102,
    ExpectedLParen = 103,
    ExpectedIdentifier = 104,
    ExpectedSemicolon = 105,
    UnexpectedToken = 106,
    ExpectedLBrace = 107,

    // Semantic (200-299), reserved for a checking pass
    UndefinedSymbol = 201,
    ArgumentCountMismatch = 202,
    TypeMismatch = 203,

    /// Left side of `=` is not a plain name.
    ///
    /// Emitted by the parser, outside the numbered ranges. The number is
    /// kept for compatibility and the code is classified as semantic.
    InvalidAssignmentTarget = 300,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::UnexpectedCharacter,
        ErrorCode::UnterminatedString,
        ErrorCode::ExpectedRBrace,
        ErrorCode::ExpectedRParen,
        ErrorCode::ExpectedLParen,
        ErrorCode::ExpectedIdentifier,
        ErrorCode::ExpectedSemicolon,
        ErrorCode::UnexpectedToken,
        ErrorCode::ExpectedLBrace,
        ErrorCode::UndefinedSymbol,
        ErrorCode::ArgumentCountMismatch,
        ErrorCode::TypeMismatch,
        ErrorCode::InvalidAssignmentTarget,
    ];

    /// Prefix printed before the zero-padded number.
    pub const PREFIX: &'static str = "WCE";

    #[inline]
    pub const fn number(self) -> u16 {
        self as u16
    }

    /// Code as printed in diagnostics, e.g. `WCE002`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "WCE001",
            ErrorCode::UnterminatedString => "WCE002",
            ErrorCode::ExpectedRBrace => "WCE101",
            ErrorCode::ExpectedRParen => "WCE102",
            ErrorCode::ExpectedLParen => "WCE103",
            ErrorCode::ExpectedIdentifier => "WCE104",
            ErrorCode::ExpectedSemicolon => "WCE105",
            ErrorCode::UnexpectedToken => "WCE106",
            ErrorCode::ExpectedLBrace => "WCE107",
            ErrorCode::UndefinedSymbol => "WCE201",
            ErrorCode::ArgumentCountMismatch => "WCE202",
            ErrorCode::TypeMismatch => "WCE203",
            ErrorCode::InvalidAssignmentTarget => "WCE300",
        }
    }

    pub const fn category(self) -> ErrorCategory {
        match self {
            ErrorCode::UnexpectedCharacter | ErrorCode::UnterminatedString => {
                ErrorCategory::Lexical
            }
            ErrorCode::ExpectedRBrace
            | ErrorCode::ExpectedRParen
            | ErrorCode::ExpectedLParen
            | ErrorCode::ExpectedIdentifier
            | ErrorCode::ExpectedSemicolon
            | ErrorCode::UnexpectedToken
            | ErrorCode::ExpectedLBrace => ErrorCategory::Syntax,
            ErrorCode::UndefinedSymbol
            | ErrorCode::ArgumentCountMismatch
            | ErrorCode::TypeMismatch
            | ErrorCode::InvalidAssignmentTarget => ErrorCategory::Semantic,
        }
    }

    /// One-line summary used by `wcec explain` headers.
    pub const fn summary(self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "unexpected character",
            ErrorCode::UnterminatedString => "unterminated string literal",
            ErrorCode::ExpectedRBrace => "missing '}'",
            ErrorCode::ExpectedRParen => "missing ')'",
            ErrorCode::ExpectedLParen => "missing '('",
            ErrorCode::ExpectedIdentifier => "expected identifier",
            ErrorCode::ExpectedSemicolon => "expected ';'",
            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::ExpectedLBrace => "missing '{'",
            ErrorCode::UndefinedSymbol => "undefined symbol",
            ErrorCode::ArgumentCountMismatch => "argument count mismatch",
            ErrorCode::TypeMismatch => "type mismatch",
            ErrorCode::InvalidAssignmentTarget => "invalid assignment target",
        }
    }

    pub fn from_number(number: u16) -> Option<ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.number() == number)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known error code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErrorCodeError(String);

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for ParseErrorCodeError {}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    /// Accepts `WCE106`, `wce106` and bare `106`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = if trimmed.len() >= Self::PREFIX.len()
            && trimmed.is_char_boundary(Self::PREFIX.len())
            && trimmed[..Self::PREFIX.len()].eq_ignore_ascii_case(Self::PREFIX)
        {
            &trimmed[Self::PREFIX.len()..]
        } else {
            trimmed
        };

        digits
            .parse::<u16>()
            .ok()
            .and_then(ErrorCode::from_number)
            .ok_or_else(|| ParseErrorCodeError(s.to_string()))
    }
}
