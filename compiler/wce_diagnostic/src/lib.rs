//! Diagnostic system for the WebCee compiler.
//!
//! - [`ErrorCode`]: the stable numeric taxonomy (`WCE001`, `WCE106`, ...)
//! - [`Diagnostic`]: one positioned, bounded message
//! - [`DiagnosticCollector`]: insertion-ordered store shared by every stage
//! - [`TerminalEmitter`]: `file(line,col): LEVEL WCEnnn: message` rendering
//! - [`ErrorDocs`]: long-form explanations for `wcec explain`
//!
//! Compilation problems are recorded, never returned as `Err`: the
//! tokenizer and parser always run to completion and the driver decides
//! what to do by asking [`DiagnosticCollector::has_errors`].

mod collector;
mod diagnostic;
pub mod emitter;
mod error_code;
mod errors;

pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, Severity, MAX_MESSAGE_LEN};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::{ErrorCategory, ErrorCode, ParseErrorCodeError};
pub use errors::ErrorDocs;
