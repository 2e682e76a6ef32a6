//! Command handlers for the `wcec` CLI.
//!
//! Each handler returns `true` on success; `main` turns `false` into exit
//! status 1. Shared helpers for reading sources and printing diagnostics
//! live here.

mod build;
mod check;
mod containers;
mod debug;
mod explain;

pub use build::{build_files, parse_build_args, BuildOptions};
pub use check::check_file;
pub use containers::list_containers;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;

use std::io::{self, IsTerminal};
use std::path::Path;

use wce_diagnostic::{ColorMode, DiagnosticCollector, DiagnosticEmitter, TerminalEmitter};
use wce_parse::ParseOutput;

use crate::{compile, CompileError, CompileOptions, CompileOutput};

/// Read a source file as UTF-8.
pub fn read_file(path: &Path) -> Result<String, CompileError> {
    std::fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `path`, printing the error on failure.
fn read_or_report(path: &Path) -> Option<String> {
    read_file(path)
        .map_err(|err| eprintln!("error: {err}"))
        .ok()
}

/// Parse `source`, printing allocator failure.
fn parse_or_report(
    source: &str,
    file_name: &str,
    diagnostics: &mut DiagnosticCollector,
) -> Option<ParseOutput> {
    wce_parse::parse(source, file_name, diagnostics)
        .map_err(|err| eprintln!("error: {}", CompileError::from(err)))
        .ok()
}

/// Read and compile one file.
pub fn compile_path(path: &Path, options: &CompileOptions) -> Result<CompileOutput, CompileError> {
    let source = read_file(path)?;
    compile(&source, options)
}

/// `Auto` yields to `NO_COLOR` when it is set and non-empty.
pub fn resolve_color(mode: ColorMode) -> ColorMode {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if mode == ColorMode::Auto && no_color {
        ColorMode::Never
    } else {
        mode
    }
}

/// Print every diagnostic to stderr, followed by a count when any exist.
fn report(diagnostics: &DiagnosticCollector, color: ColorMode) {
    if diagnostics.is_empty() {
        return;
    }
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(stderr.lock(), resolve_color(color), is_tty);
    emitter.emit_all(diagnostics.as_slice());
    emitter.emit_summary(diagnostics.error_count(), diagnostics.warning_count());
    emitter.flush();
}
