//! Embedded long-form documentation for `wcec explain`.
//!
//! Each code has a markdown page in this directory, embedded at compile
//! time. To document a new code, add `WCEnnn.md` here and an entry to
//! `DOCS`.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Markdown page for `code`, if one exists.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Every documented code.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Lexical
    (ErrorCode::UnexpectedCharacter, include_str!("WCE001.md")),
    (ErrorCode::UnterminatedString, include_str!("WCE002.md")),
    // Syntax
    (ErrorCode::ExpectedRBrace, include_str!("WCE101.md")),
    (ErrorCode::ExpectedRParen, include_str!("WCE102.md")),
    (ErrorCode::ExpectedLParen, include_str!("WCE103.md")),
    (ErrorCode::ExpectedIdentifier, include_str!("WCE104.md")),
    (ErrorCode::ExpectedSemicolon, include_str!("WCE105.md")),
    (ErrorCode::UnexpectedToken, include_str!("WCE106.md")),
    (ErrorCode::ExpectedLBrace, include_str!("WCE107.md")),
    // Semantic
    (ErrorCode::UndefinedSymbol, include_str!("WCE201.md")),
    (ErrorCode::ArgumentCountMismatch, include_str!("WCE202.md")),
    (ErrorCode::TypeMismatch, include_str!("WCE203.md")),
    (ErrorCode::InvalidAssignmentTarget, include_str!("WCE300.md")),
];
