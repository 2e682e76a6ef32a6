//! Statement rendering.
//!
//! One statement per line. `if`/`else`/`for` bodies sit at the same level
//! as their header; only blocks indent their contents.

use wce_ir::{NodeId, NodeKind};
use wce_stack::ensure_sufficient_stack;

use crate::{Emitter, Generator};

impl<E: Emitter + ?Sized> Generator<'_, E> {
    pub(crate) fn statement(&mut self, id: NodeId, level: usize) {
        ensure_sufficient_stack(|| self.render_statement(id, level));
    }

    fn render_statement(&mut self, id: NodeId, level: usize) {
        let ast = self.ast;
        match *ast.kind(id) {
            NodeKind::Root { children } => {
                for &stmt in ast.list(children) {
                    self.statement(stmt, level);
                }
            }
            NodeKind::Block { children } => {
                self.line(level, "{");
                for &stmt in ast.list(children) {
                    self.statement(stmt, level + 1);
                }
                self.line(level, "}");
            }
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.indent(level);
                self.out.emit("if (");
                self.optional_expression(condition);
                self.out.emit(")");
                self.out.emit_newline();
                self.optional_statement(then_branch, level);
                if let Some(else_branch) = else_branch {
                    self.line(level, "else");
                    self.statement(else_branch, level);
                }
            }
            NodeKind::For {
                init,
                condition,
                increment,
                body,
            } => {
                self.indent(level);
                self.out.emit("for (");
                self.optional_expression(init);
                self.out.emit(";");
                self.spaced_clause(condition);
                self.out.emit(";");
                self.spaced_clause(increment);
                self.out.emit(")");
                self.out.emit_newline();
                self.optional_statement(body, level);
            }
            NodeKind::FunctionCall {
                name,
                args,
                block: Some(block),
            } => {
                let name = ast.text(name);
                self.indent(level);
                self.out.emit(name);
                self.out.emit("_begin(");
                self.arguments(ast.list(args));
                self.out.emit(");");
                self.out.emit_newline();

                self.statement(block, level);

                self.indent(level);
                self.out.emit(name);
                self.out.emit("_end();");
                self.out.emit_newline();
            }
            NodeKind::FunctionCall { block: None, .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::NumberLiteral { .. }
            | NodeKind::Identifier { .. }
            | NodeKind::BinaryExpr { .. } => {
                self.indent(level);
                self.expression(id);
                self.out.emit(";");
                self.out.emit_newline();
            }
        }
    }

    fn line(&mut self, level: usize, text: &str) {
        self.indent(level);
        self.out.emit(text);
        self.out.emit_newline();
    }

    // Slots left empty by error recovery are skipped.

    fn optional_statement(&mut self, id: Option<NodeId>, level: usize) {
        if let Some(id) = id {
            self.statement(id, level);
        }
    }

    fn optional_expression(&mut self, id: Option<NodeId>) {
        if let Some(id) = id {
            self.expression(id);
        }
    }

    /// A `for` clause after a `;`: ` clause`, or nothing when omitted.
    fn spaced_clause(&mut self, id: Option<NodeId>) {
        if let Some(id) = id {
            self.out.emit(" ");
            self.expression(id);
        }
    }
}
