//! One-token lookahead over the tokenizer.
//!
//! `Unknown` tokens were already diagnosed by the tokenizer, so the cursor
//! drops them on every advance and the grammar never sees them.

use wce_diagnostic::DiagnosticCollector;
use wce_ir::{Span, Token, TokenKind};
use wce_lexer::Tokenizer;

pub struct Cursor<'a, 'd> {
    tokenizer: Tokenizer<'a, 'd>,
    current: Token<'a>,
    /// End offset of the last consumed token.
    prev_end: u32,
    /// Tokens consumed so far; used to detect loops that make no progress.
    consumed: usize,
}

impl<'a, 'd> Cursor<'a, 'd> {
    pub fn new(mut tokenizer: Tokenizer<'a, 'd>) -> Self {
        let current = next_significant(&mut tokenizer);
        Cursor {
            tokenizer,
            current,
            prev_end: 0,
            consumed: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> Token<'a> {
        self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Consume the current token and return it. At `Eof` nothing moves.
    pub fn advance(&mut self) -> Token<'a> {
        let token = self.current;
        if token.kind != TokenKind::Eof {
            self.prev_end = token.span.end;
            self.consumed += 1;
            self.current = next_significant(&mut self.tokenizer);
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    pub fn span_from(&self, start: Span) -> Span {
        Span::new(start.start, self.prev_end.max(start.start))
    }

    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    #[inline]
    pub fn file_name(&self) -> &'a str {
        self.tokenizer.file_name()
    }

    #[inline]
    pub fn diagnostics(&mut self) -> &mut DiagnosticCollector {
        self.tokenizer.diagnostics()
    }
}

fn next_significant<'a>(tokenizer: &mut Tokenizer<'a, '_>) -> Token<'a> {
    loop {
        let token = tokenizer.next_token();
        if token.kind != TokenKind::Unknown {
            return token;
        }
    }
}

#[cfg(test)]
mod tests;
