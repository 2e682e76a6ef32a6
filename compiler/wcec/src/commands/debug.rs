//! Debug commands: `lex` and `parse` for inspecting compiler internals.

use std::path::Path;

use wce_diagnostic::{ColorMode, DiagnosticCollector};
use wce_lexer::tokenize;

use super::{parse_or_report, read_or_report, report};

/// Print the token stream of a file.
pub fn lex_file(path: &Path, color: ColorMode) -> bool {
    let Some(source) = read_or_report(path) else {
        return false;
    };

    let file_name = path.display().to_string();
    let mut diagnostics = DiagnosticCollector::new();
    let tokens = tokenize(&source, &file_name, &mut diagnostics);

    println!("Tokens for '{file_name}' ({} tokens):", tokens.len());
    for token in &tokens {
        println!("  {}:{}  {token}", token.pos.line, token.pos.column);
    }

    report(&diagnostics, color);
    !diagnostics.has_errors()
}

/// Print the syntax tree of a file.
pub fn parse_file(path: &Path, color: ColorMode) -> bool {
    let Some(source) = read_or_report(path) else {
        return false;
    };

    let file_name = path.display().to_string();
    let mut diagnostics = DiagnosticCollector::new();
    let Some(output) = parse_or_report(&source, &file_name, &mut diagnostics) else {
        return false;
    };

    println!("Parse result for '{file_name}':");
    println!("  Nodes: {}", output.ast.len());
    println!("  Errors: {}", diagnostics.error_count());
    println!();
    print!("{}", output.ast.dump(output.root));

    report(&diagnostics, color);
    !diagnostics.has_errors()
}
