//! Expression parsing.
//!
//! Precedence, loosest first:
//!
//! | Level          | Operators            | Associativity |
//! |----------------|----------------------|---------------|
//! | assignment     | `=`                  | right         |
//! | equality       | `==` `!=`            | left          |
//! | comparison     | `<` `<=` `>` `>=`    | left          |
//! | term           | `+` `-`              | left          |
//! | factor         | `*` `/`              | left          |
//! | primary        | literals, names, calls, `( … )` | |
//!
//! An operator with no right operand reports once and yields its left
//! operand, so callers always get the longest well-formed prefix.

mod operators;

use smallvec::SmallVec;
use wce_diagnostic::ErrorCode;
use wce_ir::{ArenaStr, BinaryOp, Node, NodeId, NodeKind, Token, TokenKind};
use wce_stack::ensure_sufficient_stack;

use self::operators::{
    match_additive_op, match_comparison_op, match_equality_op, match_multiplicative_op,
};
use crate::Parser;

impl<'a> Parser<'a, '_> {
    /// `expression := assignment`
    ///
    /// Returns `None` without reporting when no expression starts here.
    pub(crate) fn parse_expression(&mut self) -> Option<NodeId> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// An expression that must be present; reports 106 otherwise.
    pub(crate) fn expect_expression(&mut self) -> Option<NodeId> {
        let expr = self.parse_expression();
        if expr.is_none() {
            self.syntax_error(ErrorCode::UnexpectedToken, "Expected expression");
        }
        expr
    }

    /// `assignment := equality ('=' assignment)?`
    ///
    /// Only a bare identifier may be assigned to. Any other target reports
    /// 300 at the `=` and the left operand is returned unchanged.
    fn parse_assignment(&mut self) -> Option<NodeId> {
        let left = self.parse_equality()?;
        if !self.check(TokenKind::Assign) {
            return Some(left);
        }
        let op_token = self.advance();

        let Some(right) = self.parse_expression() else {
            self.missing_operand(BinaryOp::Assign);
            return Some(left);
        };

        if !matches!(self.ast.kind(left), NodeKind::Identifier { .. }) {
            self.report(
                op_token.pos,
                ErrorCode::InvalidAssignmentTarget,
                "Invalid assignment target",
            );
            return Some(left);
        }

        self.binary(BinaryOp::Assign, op_token, left, right)
    }

    fn parse_equality(&mut self) -> Option<NodeId> {
        self.parse_binary_level(Self::parse_comparison, match_equality_op)
    }

    fn parse_comparison(&mut self) -> Option<NodeId> {
        self.parse_binary_level(Self::parse_term, match_comparison_op)
    }

    fn parse_term(&mut self) -> Option<NodeId> {
        self.parse_binary_level(Self::parse_factor, match_additive_op)
    }

    fn parse_factor(&mut self) -> Option<NodeId> {
        self.parse_binary_level(Self::parse_primary, match_multiplicative_op)
    }

    /// One left-associative level: `operand (op operand)*`.
    fn parse_binary_level(
        &mut self,
        operand: fn(&mut Self) -> Option<NodeId>,
        match_op: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Option<NodeId> {
        let mut left = operand(self)?;
        while let Some(op) = match_op(self.current_kind()) {
            let op_token = self.advance();
            let Some(right) = operand(self) else {
                self.missing_operand(op);
                return Some(left);
            };
            left = self.binary(op, op_token, left, right)?;
        }
        Some(left)
    }

    /// `STRING | NUMBER | IDENTIFIER ('(' args? ')')? | '(' expression ')'`
    fn parse_primary(&mut self) -> Option<NodeId> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::String => {
                self.advance();
                let value = self.intern(token.text)?;
                self.alloc(NodeKind::StringLiteral { value }, token)
            }
            TokenKind::Number => {
                self.advance();
                // The tokenizer only produces `digits ('.' digits)?`.
                let value = token.text.parse::<f64>().unwrap_or_default();
                self.alloc(NodeKind::NumberLiteral { value }, token)
            }
            TokenKind::Identifier => {
                self.advance();
                let name = self.intern(token.text)?;
                if self.cursor.eat(TokenKind::LParen) {
                    self.parse_call(token, name)
                } else {
                    self.alloc(NodeKind::Identifier { name }, token)
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.expect_expression();
                self.consume(TokenKind::RParen, ErrorCode::ExpectedRParen, "Expected ')'");
                inner
            }
            _ => None,
        }
    }

    /// Argument list after `name(`; the `(` is already consumed.
    fn parse_call(&mut self, name_token: Token<'a>, name: ArenaStr) -> Option<NodeId> {
        let mut args: SmallVec<[NodeId; 4]> = SmallVec::new();
        if !self.check(TokenKind::RParen) {
            while let Some(arg) = self.parse_expression() {
                args.push(arg);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RParen, ErrorCode::ExpectedRParen, "Expected ')'");

        let args = self.alloc_list(&args)?;
        self.alloc(
            NodeKind::FunctionCall {
                name,
                args,
                block: None,
            },
            name_token,
        )
    }

    /// Build a binary node spanning from `left` to the last consumed token,
    /// positioned at the operator.
    fn binary(
        &mut self,
        op: BinaryOp,
        op_token: Token<'_>,
        left: NodeId,
        right: NodeId,
    ) -> Option<NodeId> {
        let span = self.cursor.span_from(self.ast.get(left).span);
        let result = self.ast.alloc(Node::new(
            NodeKind::BinaryExpr { op, left, right },
            op_token.pos,
            span,
        ));
        self.track(result)
    }

    fn missing_operand(&mut self, op: BinaryOp) {
        self.syntax_error(
            ErrorCode::UnexpectedToken,
            format!("Expected expression after '{}'", op.as_symbol()),
        );
    }
}
