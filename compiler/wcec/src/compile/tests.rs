#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn clean_source_produces_code() {
    let out = compile("row() { text(\"A\"); }", &CompileOptions::for_file("ui.wce")).unwrap();

    assert!(!out.has_errors());
    assert_eq!(
        out.code.as_deref(),
        Some("row_begin();\n{\n    text(\"A\");\n}\nrow_end();\n")
    );
}

#[test]
fn errors_suppress_code_generation() {
    let out = compile("row() { ) }", &CompileOptions::for_file("ui.wce")).unwrap();

    assert!(out.has_errors());
    assert!(out.code.is_none());
    assert_eq!(
        out.diagnostics.as_slice()[0].to_string(),
        "ui.wce(1,9): ERROR WCE106: Unexpected token"
    );
}

#[test]
fn emit_on_error_forces_generation() {
    let options = CompileOptions {
        emit_on_error: true,
        ..CompileOptions::for_file("ui.wce")
    };
    let out = compile("a(); 5 = x; b();", &options).unwrap();

    assert_eq!(out.diagnostics.error_count(), 1);
    assert_eq!(out.code.as_deref(), Some("a();\n5;\nb();\n"));
}

#[test]
fn missing_semicolon_keeps_next_statement() {
    let options = CompileOptions {
        emit_on_error: true,
        ..CompileOptions::for_file("ui.wce")
    };
    let out = compile("text(\"a\")\ntext(\"b\");", &options).unwrap();

    assert_eq!(
        out.diagnostics.as_slice()[0].to_string(),
        "ui.wce(2,1): ERROR WCE105: Expected ';' after statement"
    );
    assert_eq!(out.diagnostics.error_count(), 1);
    assert_eq!(out.code.as_deref(), Some("text(\"a\");\ntext(\"b\");\n"));
}

#[test]
fn indent_width_is_configurable() {
    let options = CompileOptions {
        codegen: CodegenConfig { indent_width: 1 },
        ..CompileOptions::default()
    };
    let out = compile("r() { t(); }", &options).unwrap();
    assert_eq!(out.code.as_deref(), Some("r_begin();\n{\n t();\n}\nr_end();\n"));
}

#[test]
fn default_file_name_appears_in_diagnostics() {
    let out = compile("@", &CompileOptions::default()).unwrap();
    assert_eq!(
        out.diagnostics.as_slice()[0].to_string(),
        "<input>(1,1): ERROR WCE001: Unexpected character '@'"
    );
}
