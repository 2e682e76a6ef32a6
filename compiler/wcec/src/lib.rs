//! The WebCee compiler driver.
//!
//! Library half of the `wcec` binary: [`compile`] runs the whole pipeline
//! on one in-memory buffer, and [`commands`] implements each CLI
//! subcommand on top of it.
//!
//! # Debugging
//!
//! - `RUST_LOG=debug`: diagnostics, recovery and codegen summaries.
//! - `RUST_LOG=wce_lexer=trace`: every token.
//! - `WCE_LOG_TREE=1`: render spans as an indented tree instead of flat lines.

pub mod commands;
mod compile;
mod error;

pub use compile::{compile, CompileOptions, CompileOutput};
pub use error::CompileError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber, once, if `RUST_LOG` is set.
///
/// Logs go to stderr so they never mix with generated code on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("WCE_LOG_TREE").is_ok_and(|v| v == "1");

        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
