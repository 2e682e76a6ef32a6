//! Tree traversal.
//!
//! Implementors override the `visit_*` hooks they care about and call the
//! matching `walk_*` function to keep descending. The tree itself is never
//! mutated; a visitor only changes its own state.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl Visitor for CountCalls {
//!     fn visit_call(&mut self, ast: &Ast, id: NodeId) {
//!         self.0 += 1;
//!         walk_node(self, ast, id);
//!     }
//! }
//! ```

use wce_stack::ensure_sufficient_stack;

use crate::ast::{Ast, NodeId, NodeKind};

pub trait Visitor {
    /// Visit any node. Dispatches calls to [`Visitor::visit_call`].
    fn visit_node(&mut self, ast: &Ast, id: NodeId) {
        if let NodeKind::FunctionCall { .. } = ast.kind(id) {
            self.visit_call(ast, id);
        } else {
            walk_node(self, ast, id);
        }
    }

    /// Visit a function call, with or without a container block.
    fn visit_call(&mut self, ast: &Ast, id: NodeId) {
        walk_node(self, ast, id);
    }
}

/// Visit every child of `id` in source order.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, ast: &Ast, id: NodeId) {
    ensure_sufficient_stack(|| {
        for child in ast.children(id) {
            visitor.visit_node(ast, child);
        }
    });
}
