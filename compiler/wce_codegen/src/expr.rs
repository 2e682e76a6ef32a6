//! Expression rendering.

use wce_ir::{BinaryOp, NodeId, NodeKind};
use wce_stack::ensure_sufficient_stack;

use crate::{Emitter, Generator};

impl<E: Emitter + ?Sized> Generator<'_, E> {
    pub(crate) fn expression(&mut self, id: NodeId) {
        ensure_sufficient_stack(|| self.render_expression(id));
    }

    fn render_expression(&mut self, id: NodeId) {
        let ast = self.ast;
        match *ast.kind(id) {
            NodeKind::Identifier { name } => self.out.emit(ast.text(name)),
            NodeKind::StringLiteral { value } => {
                self.out.emit("\"");
                self.out.emit(ast.text(value));
                self.out.emit("\"");
            }
            NodeKind::NumberLiteral { value } => self.out.emit(&format_number(value)),
            NodeKind::FunctionCall { name, args, .. } => {
                self.out.emit(ast.text(name));
                self.out.emit("(");
                self.arguments(ast.list(args));
                self.out.emit(")");
            }
            NodeKind::BinaryExpr { op, left, right } => {
                self.operand(op, left, Side::Left);
                self.out.emit(" ");
                self.out.emit(op.as_symbol());
                self.out.emit(" ");
                self.operand(op, right, Side::Right);
            }
            // Statements never reach expression position.
            NodeKind::Root { .. }
            | NodeKind::Block { .. }
            | NodeKind::If { .. }
            | NodeKind::For { .. } => {}
        }
    }

    pub(crate) fn arguments(&mut self, args: &[NodeId]) {
        for (i, &arg) in args.iter().enumerate() {
            if i > 0 {
                self.out.emit(", ");
            }
            self.expression(arg);
        }
    }

    /// One side of a binary expression, parenthesized when printing it bare
    /// would regroup it.
    fn operand(&mut self, parent: BinaryOp, child: NodeId, side: Side) {
        let wrap = match self.ast.kind(child) {
            NodeKind::BinaryExpr { op, .. } => needs_parens(parent, *op, side),
            _ => false,
        };
        if wrap {
            self.out.emit("(");
            self.expression(child);
            self.out.emit(")");
        } else {
            self.expression(child);
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn needs_parens(parent: BinaryOp, child: BinaryOp, side: Side) -> bool {
    let (p, c) = (parent.precedence(), child.precedence());
    if c != p {
        return c < p;
    }
    // Equal precedence: only the side the operator associates toward is safe.
    if parent.is_right_assoc() {
        side == Side::Left
    } else {
        side == Side::Right
    }
}

/// Shortest decimal that parses back to `value`; integral values have no
/// fractional part.
pub(crate) fn format_number(value: f64) -> String {
    format!("{value}")
}
