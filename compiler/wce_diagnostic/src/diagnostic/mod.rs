//! A single diagnostic record.

use std::fmt;

use wce_ir::Position;

use crate::ErrorCode;

/// Longest message a diagnostic keeps, in characters.
pub const MAX_MESSAGE_LEN: usize = 255;

/// Printed in place of a file name when none was given.
const UNKNOWN_FILE: &str = "<unknown>";

/// Diagnostic severity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
}

impl Severity {
    /// Level word as printed in rendered output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One positioned compiler message.
///
/// Built with the `error(code).in_file(..).at(..).with_message(..)` chain.
/// The message is cut to [`MAX_MESSAGE_LEN`] characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: Option<String>,
    pub pos: Position,
    pub severity: Severity,
    pub code: ErrorCode,
    message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, code: ErrorCode) -> Self {
        Diagnostic {
            file: None,
            pos: Position::START,
            severity,
            code,
            message: String::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::new(Severity::Error, code)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Self::new(Severity::Warning, code)
    }

    #[must_use]
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = bounded(message.into());
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// File name, or `<unknown>` when none was attached.
    pub fn file_name(&self) -> &str {
        self.file.as_deref().unwrap_or(UNKNOWN_FILE)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `<file>(<line>,<column>): <LEVEL> WCE<code>: <message>`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{}): {} {}: {}",
            self.file_name(),
            self.pos.line,
            self.pos.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

fn bounded(mut message: String) -> String {
    if let Some((cut, _)) = message.char_indices().nth(MAX_MESSAGE_LEN) {
        message.truncate(cut);
    }
    message
}
