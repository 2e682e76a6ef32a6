//! Grammar productions.
//!
//! Statements live here, expressions in [`expr`].

mod expr;

use smallvec::SmallVec;
use tracing::trace;
use wce_diagnostic::ErrorCode;
use wce_ir::{NodeId, NodeKind, TokenKind};
use wce_stack::ensure_sufficient_stack;

use crate::recovery::RecoveryState;
use crate::Parser;

impl Parser<'_, '_> {
    /// Statement loop shared by the top level and blocks.
    ///
    /// Inside a block the loop stops before `}`; at the top level it runs to
    /// end of input. Every iteration consumes at least one token.
    pub(crate) fn parse_statement_list(&mut self, in_block: bool) -> SmallVec<[NodeId; 8]> {
        let mut statements = SmallVec::new();
        loop {
            if self.fatal.is_some() || self.cursor.is_at_end() {
                break;
            }
            if in_block && self.check(TokenKind::RBrace) {
                break;
            }

            let before = self.cursor.consumed();
            match self.parse_statement() {
                Some(stmt) => {
                    trace!(kind = self.ast.kind(stmt).tag(), pos = %self.ast.get(stmt).pos, "statement");
                    statements.push(stmt);
                    self.state = RecoveryState::Normal;
                }
                None if self.state.is_recovering() => self.synchronize(),
                None => {}
            }

            if self.cursor.consumed() == before {
                // Nothing matched and synchronization stopped in place (a `}`
                // with no block to close). Drop the token.
                self.advance();
            }
        }
        statements
    }

    pub(crate) fn parse_statement(&mut self) -> Option<NodeId> {
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::KwIf => self.parse_if(),
            TokenKind::KwFor => self.parse_for(),
            _ => self.parse_expression_statement(),
        })
    }

    /// Body of an `if`/`else`/`for`: a failed statement resynchronizes here
    /// so the enclosing node is still built.
    fn parse_sub_statement(&mut self) -> Option<NodeId> {
        let stmt = self.parse_statement();
        if stmt.is_none() && self.state.is_recovering() {
            self.synchronize();
        }
        stmt
    }

    /// `'{' statement* '}'`
    fn parse_block(&mut self) -> Option<NodeId> {
        let open = self.cursor.current();
        if !self.consume(TokenKind::LBrace, ErrorCode::ExpectedLBrace, "Expected '{'") {
            return None;
        }
        let statements = self.parse_statement_list(true);
        self.consume(TokenKind::RBrace, ErrorCode::ExpectedRBrace, "Expected '}'");

        let children = self.alloc_list(&statements)?;
        self.alloc(NodeKind::Block { children }, open)
    }

    /// `'wce_if' '(' expression ')' statement ('wce_else' statement)?`
    fn parse_if(&mut self) -> Option<NodeId> {
        let keyword = self.advance();
        self.consume(TokenKind::LParen, ErrorCode::ExpectedLParen, "Expected '('");
        let condition = self.expect_expression();
        self.consume(TokenKind::RParen, ErrorCode::ExpectedRParen, "Expected ')'");

        let then_branch = self.parse_sub_statement();
        let else_branch = if self.cursor.eat(TokenKind::KwElse) {
            self.parse_sub_statement()
        } else {
            None
        };

        self.alloc(
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            },
            keyword,
        )
    }

    /// `'wce_for' '(' expression? ';' expression? ';' expression? ')' statement`
    fn parse_for(&mut self) -> Option<NodeId> {
        let keyword = self.advance();
        self.consume(TokenKind::LParen, ErrorCode::ExpectedLParen, "Expected '('");

        let init = self.parse_clause(TokenKind::Semicolon);
        self.consume(TokenKind::Semicolon, ErrorCode::ExpectedSemicolon, "Expected ';'");
        let condition = self.parse_clause(TokenKind::Semicolon);
        self.consume(TokenKind::Semicolon, ErrorCode::ExpectedSemicolon, "Expected ';'");
        let increment = self.parse_clause(TokenKind::RParen);
        self.consume(TokenKind::RParen, ErrorCode::ExpectedRParen, "Expected ')'");

        let body = self.parse_sub_statement();

        self.alloc(
            NodeKind::For {
                init,
                condition,
                increment,
                body,
            },
            keyword,
        )
    }

    /// An optional `for` clause, absent when `terminator` comes next.
    fn parse_clause(&mut self, terminator: TokenKind) -> Option<NodeId> {
        if self.check(terminator) {
            None
        } else {
            self.parse_expression()
        }
    }

    /// `expression ';'`, or a container: `call '{' statement* '}'`.
    fn parse_expression_statement(&mut self) -> Option<NodeId> {
        let Some(expr) = self.parse_expression() else {
            self.syntax_error(ErrorCode::UnexpectedToken, "Unexpected token");
            return None;
        };

        let open_call = matches!(
            self.ast.kind(expr),
            NodeKind::FunctionCall { block: None, .. }
        );
        if open_call && self.check(TokenKind::LBrace) {
            if let Some(body) = self.parse_block() {
                self.ast.attach_block(expr, body);
            }
            return Some(expr);
        }

        // An error inside the expression resynchronizes here. A missing `;`
        // after a complete expression does not: the next statement starts
        // at the current token.
        if self.state.is_recovering() {
            self.synchronize();
        } else {
            self.consume(
                TokenKind::Semicolon,
                ErrorCode::ExpectedSemicolon,
                "Expected ';' after statement",
            );
        }
        Some(expr)
    }
}
