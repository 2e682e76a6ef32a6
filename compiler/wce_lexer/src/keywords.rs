//! Reserved words.
//!
//! Every keyword carries the `wce_` prefix, so plain `if`/`for` stay free
//! for use as component or variable names. Lookup compares the whole span
//! (length first), never a prefix.

use wce_ir::TokenKind;

/// Keyword for `text`, or `None` for an ordinary identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        6 if text == "wce_if" => Some(TokenKind::KwIf),
        7 if text == "wce_for" => Some(TokenKind::KwFor),
        8 if text == "wce_else" => Some(TokenKind::KwElse),
        _ => None,
    }
}
