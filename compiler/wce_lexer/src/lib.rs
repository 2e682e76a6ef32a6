//! Tokenizer for the WebCee DSL.
//!
//! [`Tokenizer`] turns a source buffer into [`Token`]s one at a time.
//! Tokens borrow their text from the buffer; nothing is copied here.
//! Lexical problems are reported into the shared
//! [`DiagnosticCollector`] and replaced by a [`TokenKind::Unknown`] marker
//! so scanning always continues to end of input.
//!
//! # Debugging
//!
//! `RUST_LOG=wce_lexer=trace` logs every token produced.

mod cursor;
mod keywords;
mod tokenizer;

pub use cursor::Cursor;
pub use tokenizer::Tokenizer;

use wce_diagnostic::DiagnosticCollector;
use wce_ir::Token;

/// Tokenize all of `source`, ending with (and including) the `Eof` token.
pub fn tokenize<'a>(
    source: &'a str,
    file_name: &'a str,
    diagnostics: &mut DiagnosticCollector,
) -> Vec<Token<'a>> {
    Tokenizer::new(source, file_name, diagnostics).collect()
}
