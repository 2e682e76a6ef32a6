//! Recursive-descent parser for the WebCee DSL.
//!
//! The parser pulls tokens from a [`Tokenizer`] one at a time and builds an
//! [`Ast`]. Syntax errors never abort the parse: each is reported once into
//! the shared [`DiagnosticCollector`], the parser enters panic mode, and the
//! statement loops resynchronize at the next `;` or `}`. The returned tree
//! may therefore be incomplete, but it is always well formed.
//!
//! # Debugging
//!
//! `RUST_LOG=wce_parse=debug` logs every reported diagnostic and every
//! synchronization; `trace` additionally logs each parsed statement.

mod cursor;
mod grammar;
mod recovery;

pub use recovery::{RecoveryState, TokenSet};

use tracing::debug;
use wce_diagnostic::{DiagnosticCollector, ErrorCode};
use wce_ir::{
    Arena, ArenaError, ArenaStr, Ast, Node, NodeId, NodeKind, NodeRange, Position, Span, Token,
    TokenKind,
};
use wce_lexer::Tokenizer;

use crate::cursor::Cursor;

/// A finished parse: the node store and the id of its `Root` node.
#[derive(Debug)]
pub struct ParseOutput {
    pub ast: Ast,
    pub root: NodeId,
}

/// Parse `source` into a tree, reporting problems into `diagnostics`.
///
/// Only allocator exhaustion is an `Err`; syntax errors are diagnostics.
pub fn parse(
    source: &str,
    file_name: &str,
    diagnostics: &mut DiagnosticCollector,
) -> Result<ParseOutput, ArenaError> {
    Parser::new(Tokenizer::new(source, file_name, diagnostics)).parse_program()
}

/// Parser state: lookahead cursor, node store and panic-mode flag.
pub struct Parser<'a, 'd> {
    cursor: Cursor<'a, 'd>,
    ast: Ast,
    state: RecoveryState,
    /// First allocator failure. Once set, parsing winds down silently.
    fatal: Option<ArenaError>,
}

impl<'a, 'd> Parser<'a, 'd> {
    pub fn new(tokenizer: Tokenizer<'a, 'd>) -> Self {
        Self::with_arena(tokenizer, Arena::default())
    }

    /// Store identifier and string text in `arena`.
    pub fn with_arena(tokenizer: Tokenizer<'a, 'd>, arena: Arena) -> Self {
        Parser {
            cursor: Cursor::new(tokenizer),
            ast: Ast::with_arena(arena),
            state: RecoveryState::Normal,
            fatal: None,
        }
    }

    #[inline]
    pub fn state(&self) -> RecoveryState {
        self.state
    }

    /// Parse statements until end of input and wrap them in a `Root` node.
    pub fn parse_program(mut self) -> Result<ParseOutput, ArenaError> {
        let statements = self.parse_statement_list(false);
        if let Some(err) = self.fatal.take() {
            return Err(err);
        }

        let children = self.ast.alloc_list(&statements)?;
        let span = self.cursor.span_from(Span::DUMMY);
        let root = self
            .ast
            .alloc(Node::new(NodeKind::Root { children }, Position::START, span))?;
        Ok(ParseOutput {
            ast: self.ast,
            root,
        })
    }

    // Cursor shorthands

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token<'a> {
        self.cursor.advance()
    }

    /// Consume a required token.
    ///
    /// On mismatch reports `message` at the current token (unless already
    /// recovering) and enters panic mode. Nothing is consumed on failure.
    fn consume(&mut self, kind: TokenKind, code: ErrorCode, message: &str) -> bool {
        if self.cursor.eat(kind) {
            return true;
        }
        self.syntax_error(code, message);
        false
    }

    /// Report a syntax error at the current token and enter panic mode.
    ///
    /// Suppressed while recovering so one mistake yields one diagnostic.
    fn syntax_error(&mut self, code: ErrorCode, message: impl Into<String>) {
        if self.state.is_recovering() || self.fatal.is_some() {
            return;
        }
        let pos = self.cursor.current().pos;
        self.report(pos, code, message);
        self.state = RecoveryState::Recovering;
    }

    /// Report an error that does not disturb the recovery state.
    fn report(&mut self, pos: Position, code: ErrorCode, message: impl Into<String>) {
        let message = message.into();
        debug!(%code, %pos, found = %self.current_kind(), "{message}");
        let file = self.cursor.file_name();
        self.cursor.diagnostics().error(Some(file), pos, code, message);
    }

    fn synchronize(&mut self) {
        recovery::synchronize(&mut self.cursor, &mut self.state);
    }

    /// Unwrap an allocation result, remembering the first failure.
    fn track<T>(&mut self, result: Result<T, ArenaError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                if self.fatal.is_none() {
                    debug!(%err, "storage exhausted, abandoning parse");
                    self.fatal = Some(err);
                }
                None
            }
        }
    }

    /// Copy `text` into the arena.
    fn intern(&mut self, text: &str) -> Option<ArenaStr> {
        let result = self.ast.alloc_str(text);
        self.track(result)
    }

    /// Allocate a node positioned at `start` and spanning to the last
    /// consumed token.
    fn alloc(&mut self, kind: NodeKind, start: Token<'_>) -> Option<NodeId> {
        let span = self.cursor.span_from(start.span);
        let result = self.ast.alloc(Node::new(kind, start.pos, span));
        self.track(result)
    }

    fn alloc_list(&mut self, ids: &[NodeId]) -> Option<NodeRange> {
        let result = self.ast.alloc_list(ids);
        self.track(result)
    }
}

#[cfg(test)]
mod tests;
