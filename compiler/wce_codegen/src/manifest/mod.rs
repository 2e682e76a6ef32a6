//! Runtime symbols a program needs.
//!
//! Every container name used in a program must be backed by a
//! `<name>_begin`/`<name>_end` pair in the runtime. The manifest records
//! each such name with the argument counts it was called with, so a runtime
//! author can see which signatures to provide.

use std::fmt::{self, Write};

use rustc_hash::{FxHashMap, FxHashSet};
use wce_ir::{walk_node, Ast, NodeId, NodeKind, Visitor};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerManifest {
    containers: FxHashMap<String, FxHashSet<usize>>,
}

impl ContainerManifest {
    /// Collect every container call reachable from `root`.
    pub fn collect(ast: &Ast, root: NodeId) -> Self {
        let mut manifest = ContainerManifest::default();
        manifest.visit_node(ast, root);
        manifest
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }

    /// Argument counts seen for `name`, ascending.
    pub fn arities(&self, name: &str) -> Vec<usize> {
        let mut counts: Vec<usize> = self
            .containers
            .get(name)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        counts.sort_unstable();
        counts
    }

    /// Container names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.containers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Visitor for ContainerManifest {
    fn visit_call(&mut self, ast: &Ast, id: NodeId) {
        if let NodeKind::FunctionCall {
            name,
            args,
            block: Some(_),
        } = *ast.kind(id)
        {
            self.containers
                .entry(ast.text(name).to_owned())
                .or_default()
                .insert(args.len());
        }
        walk_node(self, ast, id);
    }
}

/// One `name_begin`/`name_end` line per container, sorted by name, with
/// the argument counts seen.
impl fmt::Display for ContainerManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.names() {
            let mut counts = String::new();
            for (i, n) in self.arities(name).into_iter().enumerate() {
                if i > 0 {
                    counts.push_str(", ");
                }
                let _ = write!(counts, "{n}");
            }
            writeln!(f, "{name}_begin/{name}_end  args: {counts}")?;
        }
        Ok(())
    }
}
