//! The `containers` command: list the begin/end symbols a program needs.

use std::path::Path;

use wce_codegen::ContainerManifest;
use wce_diagnostic::{ColorMode, DiagnosticCollector};

use super::{parse_or_report, read_or_report, report};

pub fn list_containers(path: &Path, color: ColorMode) -> bool {
    let Some(source) = read_or_report(path) else {
        return false;
    };

    let file_name = path.display().to_string();
    let mut diagnostics = DiagnosticCollector::new();
    let Some(output) = parse_or_report(&source, &file_name, &mut diagnostics) else {
        return false;
    };

    if diagnostics.has_errors() {
        report(&diagnostics, color);
        return false;
    }

    let manifest = ContainerManifest::collect(&output.ast, output.root);
    if manifest.is_empty() {
        println!("No containers in '{file_name}'.");
    } else {
        print!("{manifest}");
    }
    true
}
