//! Code generation for the WebCee DSL.
//!
//! A read-only, depth-first walk of the tree that prints C-like source.
//! Ordinary statements print as themselves; a container call
//!
//! ```text
//! row() { text("A"); }
//! ```
//!
//! is desugared into a balanced pair of calls around its block:
//!
//! ```text
//! row_begin();
//! {
//!     text("A");
//! }
//! row_end();
//! ```
//!
//! The runtime supplies `<name>_begin`/`<name>_end` for every container
//! name; [`ContainerManifest`] lists which ones a program needs.

mod emitter;
mod expr;
mod manifest;
mod stmt;

pub use emitter::{Emitter, StringEmitter, WriteEmitter};
pub use manifest::ContainerManifest;

use std::io;

use tracing::debug;
use wce_ir::{Ast, NodeId};

/// Output layout options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig { indent_width: 4 }
    }
}

/// Generate code for the tree rooted at `root`.
pub fn generate(ast: &Ast, root: NodeId, config: &CodegenConfig) -> String {
    let mut out = StringEmitter::with_capacity(ast.len() * 16);
    Generator::new(ast, config, &mut out).statement(root, 0);
    debug!(nodes = ast.len(), bytes = out.as_str().len(), "generated");
    out.output()
}

/// Generate code for the tree rooted at `root` straight into `writer`.
pub fn generate_to<W: io::Write>(
    ast: &Ast,
    root: NodeId,
    config: &CodegenConfig,
    writer: &mut W,
) -> io::Result<()> {
    let mut out = WriteEmitter::new(writer);
    Generator::new(ast, config, &mut out).statement(root, 0);
    out.finish().map(|_| ())
}

/// Traversal state: the tree being printed and where it goes.
pub(crate) struct Generator<'a, E: Emitter + ?Sized> {
    ast: &'a Ast,
    config: &'a CodegenConfig,
    out: &'a mut E,
}

impl<'a, E: Emitter + ?Sized> Generator<'a, E> {
    pub(crate) fn new(ast: &'a Ast, config: &'a CodegenConfig, out: &'a mut E) -> Self {
        Generator { ast, config, out }
    }

    fn indent(&mut self, level: usize) {
        self.out.emit_indent(level * self.config.indent_width);
    }
}
