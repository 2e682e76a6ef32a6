//! Byte cursor with line/column tracking.
//!
//! All DSL syntax is ASCII, so the cursor works on bytes and only steps
//! over whole UTF-8 characters where non-ASCII text can appear (string
//! bodies and unexpected characters). Columns are 1-based byte offsets
//! from the start of the line.

use wce_ir::Position;

/// Cursor over a source string.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current byte, or `0` at end of input.
    ///
    /// An interior NUL also reads as `0`; check [`is_eof`](Self::is_eof)
    /// to tell them apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the current one, or `0`.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.src.as_bytes().get(index).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Byte offset of the current position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Line and column of the current byte.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Step over one byte, starting a new line after `\n`.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    /// Step over one whole UTF-8 character.
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        if width == 1 {
            self.advance();
        } else {
            self.skip_bytes(width);
        }
    }

    /// Character at the current position.
    pub fn current_char(&self) -> Option<char> {
        self.src.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred` must reject `\n`; line tracking relies on newlines going
    /// through [`advance`](Self::advance).
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
            self.column += 1;
        }
    }

    /// Jump to the next `\n` (not consumed) or to end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = &self.src.as_bytes()[self.pos..];
        let skip = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        self.skip_bytes(skip);
    }

    /// Jump to the next byte that matters inside a string literal: `"`,
    /// `\` or `\n`. Returns that byte (not consumed), or `None` at end of
    /// input with the cursor parked there.
    pub fn skip_to_string_delim(&mut self) -> Option<u8> {
        let rest = &self.src.as_bytes()[self.pos..];
        match memchr::memchr3(b'"', b'\\', b'\n', rest) {
            Some(offset) => {
                self.skip_bytes(offset);
                Some(self.current())
            }
            None => {
                self.skip_bytes(rest.len());
                None
            }
        }
    }

    /// Move forward `n` bytes known not to contain a newline.
    #[inline]
    fn skip_bytes(&mut self, n: usize) {
        let n = n.min(self.src.len() - self.pos);
        self.pos += n;
        self.column = self
            .column
            .saturating_add(u32::try_from(n).unwrap_or(u32::MAX));
    }

    /// Source text from `start` to the current position.
    ///
    /// Returns `""` if the range does not fall on character boundaries,
    /// which cannot happen for ranges produced by the tokenizer.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.src.get(start..end).unwrap_or_default()
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.src
    }
}

#[cfg(test)]
mod tests;
