//! Driver failures.
//!
//! These are infrastructure problems (files, allocation). Problems in the
//! compiled program itself are diagnostics, never a `CompileError`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use wce_ir::ArenaError;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("{}", describe_read(path, source))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{target}': {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("out of memory while compiling: {0}")]
    Arena(#[from] ArenaError),
}

fn describe_read(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
