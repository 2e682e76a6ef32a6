//! Parser tests.
//!
//! - `parser`: well-formed input and the shape of the resulting tree
//! - `recovery`: malformed input, diagnostic counts and resynchronization


use wce_diagnostic::DiagnosticCollector;

use crate::{parse, ParseOutput};

/// Parse `source`, returning the tree and every diagnostic reported.
fn parse_source(source: &str) -> (ParseOutput, DiagnosticCollector) {
    let mut diagnostics = DiagnosticCollector::new();
    let output = match parse(source, "test.wce", &mut diagnostics) {
        Ok(output) => output,
        Err(err) => panic!("arena failure: {err}"),
    };
    (output, diagnostics)
}

/// Error codes in report order.
fn codes(diagnostics: &DiagnosticCollector) -> Vec<u16> {
    diagnostics.iter().map(|d| d.code.number()).collect()
}

fn dump(source: &str) -> String {
    let (output, _) = parse_source(source);
    output.ast.dump(output.root)
}
