//! Indented text rendering of a tree, for `wcec parse` and tests.

use std::fmt::Write;

use wce_stack::ensure_sufficient_stack;

use super::{Ast, NodeId, NodeKind};

impl Ast {
    /// Render the subtree at `root`, one node per line, two spaces per level.
    ///
    /// Named slots are prefixed with their role (`cond:`, `then:`, `block:`)
    /// so an omitted `for` clause is visible as a missing line rather than a
    /// shifted one.
    pub fn dump(&self, root: NodeId) -> String {
        let mut out = String::new();
        self.dump_node(&mut out, root, 0, None);
        out
    }

    fn dump_node(&self, out: &mut String, id: NodeId, depth: usize, role: Option<&str>) {
        ensure_sufficient_stack(|| self.dump_line(out, id, depth, role));
    }

    fn dump_line(&self, out: &mut String, id: NodeId, depth: usize, role: Option<&str>) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        if let Some(role) = role {
            out.push_str(role);
            out.push_str(": ");
        }

        let child = depth + 1;
        match *self.kind(id) {
            NodeKind::Root { children } | NodeKind::Block { children } => {
                out.push_str(self.kind(id).tag());
                out.push('\n');
                for &stmt in self.list(children) {
                    self.dump_node(out, stmt, child, None);
                }
            }
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push_str("If\n");
                self.dump_slot(out, condition, child, "cond");
                self.dump_slot(out, then_branch, child, "then");
                self.dump_slot(out, else_branch, child, "else");
            }
            NodeKind::For {
                init,
                condition,
                increment,
                body,
            } => {
                out.push_str("For\n");
                self.dump_slot(out, init, child, "init");
                self.dump_slot(out, condition, child, "cond");
                self.dump_slot(out, increment, child, "inc");
                self.dump_slot(out, body, child, "body");
            }
            NodeKind::FunctionCall { name, args, block } => {
                let _ = writeln!(out, "FunctionCall {}", self.text(name));
                for &arg in self.list(args) {
                    self.dump_node(out, arg, child, None);
                }
                self.dump_slot(out, block, child, "block");
            }
            NodeKind::StringLiteral { value } => {
                let _ = writeln!(out, "StringLiteral \"{}\"", self.text(value));
            }
            NodeKind::NumberLiteral { value } => {
                let _ = writeln!(out, "NumberLiteral {value}");
            }
            NodeKind::Identifier { name } => {
                let _ = writeln!(out, "Identifier {}", self.text(name));
            }
            NodeKind::BinaryExpr { op, left, right } => {
                let _ = writeln!(out, "BinaryExpr {}", op.as_symbol());
                self.dump_node(out, left, child, None);
                self.dump_node(out, right, child, None);
            }
        }
    }

    fn dump_slot(&self, out: &mut String, slot: Option<NodeId>, depth: usize, role: &str) {
        if let Some(id) = slot {
            self.dump_node(out, id, depth, Some(role));
        }
    }
}
