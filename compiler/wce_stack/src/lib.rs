//! Stack growth for deeply nested input.
//!
//! The parser recurses once per nested parenthesis, block or operand, and
//! the code generator once per nested statement or expression. Wrapping
//! those recursive entry points in [`ensure_sufficient_stack`] lets input
//! nested tens of thousands of levels deep finish instead of overflowing.
//!
//! - Red zone: 100 KiB. Less than this remaining triggers growth.
//! - Growth: 1 MiB per new segment.

const RED_ZONE: usize = 100 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
