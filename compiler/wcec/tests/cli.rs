//! End-to-end tests of the `wcec` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn wcec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wcec"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run wcec")
}

fn write(dir: &Path, name: &str, source: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, source).unwrap();
    path.to_str().unwrap().to_owned()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).unwrap()
}

#[test]
fn build_writes_c_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "ui.wce", "row() { text(\"A\"); }\n");

    let out = wcec(&["build", &input]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        fs::read_to_string(dir.path().join("ui.c")).unwrap(),
        "row_begin();\n{\n    text(\"A\");\n}\nrow_end();\n"
    );
}

#[test]
fn build_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "ui.wce", "wce_for (;;) {}");

    let out = wcec(&["build", &input, "-o", "-"]);

    assert!(out.status.success());
    assert_eq!(stdout(&out), "for (;;)\n{\n}\n");
}

#[test]
fn build_many_inputs() {
    let dir = TempDir::new().unwrap();
    let inputs: Vec<String> = (0..6)
        .map(|i| write(dir.path(), &format!("f{i}.wce"), &format!("panel({i}) {{ }}")))
        .collect();
    let mut args = vec!["build"];
    args.extend(inputs.iter().map(String::as_str));

    let out = wcec(&args);

    assert!(out.status.success());
    for i in 0..6 {
        let code = fs::read_to_string(dir.path().join(format!("f{i}.c"))).unwrap();
        assert!(code.starts_with(&format!("panel_begin({i});")));
    }
}

#[test]
fn errors_fail_the_build_and_skip_output() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "bad.wce", "row() {\n  text(\"A\")\n}\n");

    let out = wcec(&["build", &input]);

    assert!(!out.status.success());
    assert!(!dir.path().join("bad.c").exists());
    let err = stderr(&out);
    assert!(err.contains("bad.wce(3,1): ERROR WCE105: Expected ';' after statement"), "{err}");
    assert!(err.contains("1 error, 0 warnings emitted"), "{err}");
}

#[test]
fn emit_on_error_still_writes_but_fails() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "bad.wce", "5 = x; ok();");

    let out = wcec(&["build", &input, "--emit-on-error"]);

    assert!(!out.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("bad.c")).unwrap(), "5;\nok();\n");
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.wce");

    let out = wcec(&["check", missing.to_str().unwrap()]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("cannot find file"));
}

#[test]
fn check_clean_file() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "ok.wce", "text(\"fine\");");

    let out = wcec(&["check", &input]);

    assert!(out.status.success());
    assert!(stderr(&out).is_empty());
}

#[test]
fn parse_prints_tree() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "t.wce", "row() { text(\"A\"); }");

    let out = wcec(&["parse", &input]);

    assert!(out.status.success());
    assert!(stdout(&out).ends_with(
        "Root\n  FunctionCall row\n    block: Block\n      FunctionCall text\n        StringLiteral \"A\"\n"
    ));
}

#[test]
fn lex_lists_tokens() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "t.wce", "wce_if (a)");

    let out = wcec(&["lex", &input]);

    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("(5 tokens)"), "{text}");
    assert!(text.contains("1:1  wce_if"));
    assert!(text.contains("1:9  identifier `a`"));
}

#[test]
fn containers_manifest() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "t.wce", "window(\"w\") { row() {} row(1) {} }");

    let out = wcec(&["containers", &input]);

    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "row_begin/row_end  args: 0, 1\nwindow_begin/window_end  args: 1\n"
    );
}

#[test]
fn explain_known_and_unknown_codes() {
    let out = wcec(&["explain", "WCE106"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("WCE106"));

    let out = wcec(&["explain", "E9999"]);
    assert!(!out.status.success());
}

#[test]
fn unknown_command_fails() {
    let out = wcec(&["frobnicate"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Unknown command: frobnicate"));
}

#[test]
fn version_and_help() {
    assert!(stdout(&wcec(&["version"])).starts_with("wcec "));
    assert!(stdout(&wcec(&["help"])).contains("Usage: wcec <command>"));
}
