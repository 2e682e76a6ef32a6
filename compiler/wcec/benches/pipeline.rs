//! Pipeline benchmarks: tokenize, parse, and the full compile.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Benchmarks can panic")]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wce_diagnostic::DiagnosticCollector;
use wcec::{compile, CompileOptions};

/// A small settings screen.
const SETTINGS: &str = r#"
window("Settings") {
    column() {
        text("Volume");
        slider(volume, 0, 100);
        wce_if (volume > 80) {
            text("Loud!");
        } wce_else {
            text("OK");
        }
        row() {
            button("Cancel");
            button("Save");
        }
    }
}
"#;

/// `n` sibling rows, each with a loop inside.
fn generate_rows(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "row({i}) {{ wce_for (j = 0; j < {i}; j = j + 1) {{ cell(j * 2 + {i}); }} }}\n"
            )
        })
        .collect()
}

/// Containers nested `depth` levels deep.
fn generate_nested(depth: usize) -> String {
    format!("{}text(\"leaf\");{}", "panel() { ".repeat(depth), " }".repeat(depth))
}

fn bench_lexer(c: &mut Criterion) {
    let source = generate_rows(500);
    c.bench_function("lexer/rows_500", |b| {
        b.iter(|| {
            let mut diags = DiagnosticCollector::new();
            black_box(wce_lexer::tokenize(black_box(&source), "bench.wce", &mut diags).len())
        });
    });
}

fn bench_parser(c: &mut Criterion) {
    c.bench_function("parser/settings", |b| {
        b.iter(|| {
            let mut diags = DiagnosticCollector::new();
            black_box(wce_parse::parse(black_box(SETTINGS), "bench.wce", &mut diags).unwrap())
        });
    });
}

fn bench_compile(c: &mut Criterion) {
    let options = CompileOptions::for_file("bench.wce");
    let mut group = c.benchmark_group("compile");

    for n in [10, 100, 1000] {
        let source = generate_rows(n);
        group.bench_with_input(BenchmarkId::new("rows", n), &source, |b, source| {
            b.iter(|| black_box(compile(source, &options).unwrap()));
        });
    }

    for depth in [10, 100, 1000] {
        let source = generate_nested(depth);
        group.bench_with_input(BenchmarkId::new("nested", depth), &source, |b, source| {
            b.iter(|| black_box(compile(source, &options).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lexer, bench_parser, bench_compile);
criterion_main!(benches);
