//! The compilation pipeline as a library call.
//!
//! Tokenize and parse one buffer, then generate code unless the parse
//! reported errors. Code generation on a broken tree can be forced with
//! [`CompileOptions::emit_on_error`]; the output is then best effort.

use tracing::debug;
use wce_codegen::{generate, CodegenConfig};
use wce_diagnostic::DiagnosticCollector;

use crate::CompileError;

/// Inputs that shape one compilation.
#[derive(Clone, Debug)]
pub struct CompileOptions {
    /// Name printed in diagnostics.
    pub file_name: String,
    pub codegen: CodegenConfig,
    /// Generate code even when errors were reported.
    pub emit_on_error: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            file_name: "<input>".to_owned(),
            codegen: CodegenConfig::default(),
            emit_on_error: false,
        }
    }
}

impl CompileOptions {
    pub fn for_file(file_name: impl Into<String>) -> Self {
        CompileOptions {
            file_name: file_name.into(),
            ..Self::default()
        }
    }
}

/// Result of one compilation.
#[derive(Debug)]
pub struct CompileOutput {
    /// Generated code; `None` when errors stopped generation.
    pub code: Option<String>,
    pub diagnostics: DiagnosticCollector,
}

impl CompileOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Compile `source` to target code.
///
/// `Err` only for allocator exhaustion. Everything wrong with the program
/// ends up in [`CompileOutput::diagnostics`].
#[tracing::instrument(level = "debug", skip_all, fields(file = %options.file_name))]
pub fn compile(source: &str, options: &CompileOptions) -> Result<CompileOutput, CompileError> {
    let mut diagnostics = DiagnosticCollector::new();
    let parsed = wce_parse::parse(source, &options.file_name, &mut diagnostics)?;

    let code = if diagnostics.has_errors() && !options.emit_on_error {
        debug!(errors = diagnostics.error_count(), "skipping code generation");
        None
    } else {
        Some(generate(&parsed.ast, parsed.root, &options.codegen))
    };

    Ok(CompileOutput { code, diagnostics })
}

#[cfg(test)]
mod tests;
