//! WebCee IR - shared data structures for the WebCee compiler.
//!
//! This crate holds the types every compiler stage agrees on:
//! - [`Span`] and [`Position`] for source locations
//! - [`Token`] and [`TokenKind`] produced by the tokenizer
//! - [`Arena`], the bump allocator that owns derived strings
//! - [`Ast`], a flat node store addressed by [`NodeId`] handles
//!
//! # Design
//!
//! Nodes never point at each other directly. Children are stored as
//! `NodeId` handles, either in named optional slots (`If`, `For`) or as
//! contiguous [`NodeRange`]s into a shared list vector (blocks, call
//! arguments). The whole tree is torn down at once when the `Ast` drops.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod span;
mod token;
pub mod visitor;

pub use arena::{
    Arena, ArenaError, ArenaPtr, ArenaStr, ALIGNMENT, DEFAULT_BLOCK_SIZE, MIN_BLOCK_SIZE,
};
pub use ast::{Ast, BinaryOp, Node, NodeId, NodeKind, NodeRange};
pub use span::{Position, Span};
pub use token::{Token, TokenKind};
pub use visitor::{walk_node, Visitor};
