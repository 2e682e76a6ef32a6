//! Panic-mode error recovery.
//!
//! After the first syntax error in a statement the parser enters
//! [`RecoveryState::Recovering`]; further syntax errors are suppressed until
//! [`synchronize`] discards tokens up to a statement boundary.

use tracing::debug;
use wce_ir::TokenKind;

use crate::cursor::Cursor;

/// Whether syntax errors are currently being reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RecoveryState {
    #[default]
    Normal,
    /// An error was reported; stay quiet until the next boundary.
    Recovering,
}

impl RecoveryState {
    #[inline]
    pub fn is_recovering(self) -> bool {
        self == RecoveryState::Recovering
    }
}

/// A set of token kinds, one bit per [`TokenKind`] discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u32);

const _: () = assert!(TokenKind::COUNT <= 32, "TokenSet needs a wider bitset");

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u32 << kind as u8))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u32 << kind as u8)) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokens that end a statement. `;` is consumed by synchronization, `}` is
/// left for the enclosing block.
pub const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Skip to the next statement boundary and leave recovery mode.
///
/// Consumes through a `;`; stops before a `}` or at end of input.
/// Returns the number of tokens discarded.
pub fn synchronize(cursor: &mut Cursor<'_, '_>, state: &mut RecoveryState) -> usize {
    *state = RecoveryState::Normal;
    let mut skipped = 0;
    while !STMT_BOUNDARY.contains(cursor.current_kind()) {
        cursor.advance();
        skipped += 1;
    }
    if cursor.eat(TokenKind::Semicolon) {
        skipped += 1;
    }
    debug!(skipped, at = %cursor.current().pos, "synchronized");
    skipped
}

#[cfg(test)]
mod tests;
