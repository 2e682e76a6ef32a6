//! Output sinks for generated code.

use std::io;

/// Destination for generated text.
///
/// The generator only ever appends; it never reads back what it wrote.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self) {
        self.emit("\n");
    }

    /// Emit `spaces` spaces of indentation.
    fn emit_indent(&mut self, spaces: usize) {
        const BLANK: &str = "                ";
        let mut remaining = spaces;
        while remaining > 0 {
            let n = remaining.min(BLANK.len());
            self.emit(&BLANK[..n]);
            remaining -= n;
        }
    }
}

/// In-memory emitter.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// Streams generated text into any [`io::Write`].
///
/// The first write error is kept and every later write is skipped, so the
/// generator does not need to thread `Result` through each fragment.
pub struct WriteEmitter<W: io::Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: io::Write> WriteEmitter<W> {
    pub fn new(writer: W) -> Self {
        WriteEmitter {
            writer,
            error: None,
        }
    }

    /// Flush and surface the first error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: io::Write> Emitter for WriteEmitter<W> {
    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(text.as_bytes()) {
            self.error = Some(err);
        }
    }
}
