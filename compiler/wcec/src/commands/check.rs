//! The `check` command: report diagnostics without generating code.

use std::path::Path;

use wce_diagnostic::{ColorMode, DiagnosticCollector};

use super::{parse_or_report, read_or_report, report};

pub fn check_file(path: &Path, color: ColorMode) -> bool {
    let Some(source) = read_or_report(path) else {
        return false;
    };

    let file_name = path.display().to_string();
    let mut diagnostics = DiagnosticCollector::new();
    if parse_or_report(&source, &file_name, &mut diagnostics).is_none() {
        return false;
    }

    report(&diagnostics, color);
    !diagnostics.has_errors()
}
