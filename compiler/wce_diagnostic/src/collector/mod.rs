//! Insertion-ordered diagnostic store.
//!
//! Shared by the tokenizer and parser of one compilation and read by the
//! driver afterwards. Recording is best-effort: if the backing vector
//! cannot grow, the diagnostic is dropped instead of aborting the compiler.

use std::io::{self, IsTerminal, Write};

use tracing::debug;
use wce_ir::Position;

use crate::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use crate::{Diagnostic, ErrorCode, Severity};

/// Starting capacity; the vector doubles from here.
const INITIAL_CAPACITY: usize = 16;

/// Ordered collection of diagnostics with an O(1) error count.
///
/// Invariant: `error_count` equals the number of stored diagnostics whose
/// severity is [`Severity::Error`]. Every mutation goes through `push` or
/// `clear` to keep it that way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticCollector {
    items: Vec<Diagnostic>,
    error_count: usize,
}

impl Default for DiagnosticCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        DiagnosticCollector {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            error_count: 0,
        }
    }

    /// Record a diagnostic built from its parts.
    pub fn report(
        &mut self,
        file: Option<&str>,
        pos: Position,
        severity: Severity,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        let mut diag = Diagnostic::new(severity, code)
            .at(pos)
            .with_message(message);
        diag.file = file.map(str::to_owned);
        self.push(diag);
    }

    /// Shorthand for an error-severity [`report`](Self::report).
    pub fn error(
        &mut self,
        file: Option<&str>,
        pos: Position,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        self.report(file, pos, Severity::Error, code, message);
    }

    /// Record a pre-built diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.items.len() == self.items.capacity() {
            let grow = self.items.capacity().max(INITIAL_CAPACITY);
            if self.items.try_reserve_exact(grow).is_err() {
                debug!(code = %diagnostic.code, "dropping diagnostic: out of memory");
                return;
            }
        }

        debug!(
            code = %diagnostic.code,
            line = diagnostic.pos.line,
            column = diagnostic.pos.column,
            "{}",
            diagnostic.message()
        );

        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.items.push(diagnostic);
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.error_count = 0;
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }

    /// Write every diagnostic, in insertion order, one per line.
    pub fn render_all<W: Write>(&self, writer: W, colors: ColorMode, is_tty: bool) {
        let mut emitter = TerminalEmitter::with_color_mode(writer, colors, is_tty);
        emitter.emit_all(&self.items);
        emitter.flush();
    }

    /// Print every diagnostic to stderr.
    pub fn print_all(&self) {
        let stderr = io::stderr();
        let is_tty = stderr.is_terminal();
        self.render_all(stderr.lock(), ColorMode::Auto, is_tty);
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollector {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
