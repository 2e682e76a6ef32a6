//! Syntax tree.
//!
//! Nodes live in a flat vector and refer to each other through [`NodeId`]
//! handles. Variable-length child lists (block statements, call arguments)
//! are contiguous [`NodeRange`]s into a second vector, so a node never owns
//! a heap allocation of its own. Names and string literal contents are
//! copied into the tree's byte [`Arena`].
//!
//! Control-flow nodes name their slots explicitly: an omitted `for` clause
//! is `None` in its own field, never a shifted sibling.

mod dump;
mod operators;

use std::fmt;

use smallvec::SmallVec;

use crate::{Arena, ArenaError, ArenaStr, Position, Span};

pub use operators::BinaryOp;

/// Index into [`Ast`] node storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

static_assert_size!(NodeId, 4);
static_assert_size!(NodeRange, 8);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Contiguous run of child handles in [`Ast`] list storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct NodeRange {
    pub start: u32,
    pub len: u32,
}

impl NodeRange {
    pub const EMPTY: NodeRange = NodeRange { start: 0, len: 0 };

    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for NodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRange({}..{})", self.start, self.start + self.len)
    }
}

/// Node payload.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum NodeKind {
    /// Top-level statement list.
    Root { children: NodeRange },
    /// `{ statement* }`
    Block { children: NodeRange },
    /// `wce_if (condition) then_branch [wce_else else_branch]`
    ///
    /// `condition` and `then_branch` are only absent after a syntax error.
    If {
        condition: Option<NodeId>,
        then_branch: Option<NodeId>,
        else_branch: Option<NodeId>,
    },
    /// `wce_for (init; condition; increment) body`
    For {
        init: Option<NodeId>,
        condition: Option<NodeId>,
        increment: Option<NodeId>,
        body: Option<NodeId>,
    },
    /// `name(args)`, optionally followed by a container block.
    FunctionCall {
        name: ArenaStr,
        args: NodeRange,
        block: Option<NodeId>,
    },
    StringLiteral { value: ArenaStr },
    NumberLiteral { value: f64 },
    Identifier { name: ArenaStr },
    BinaryExpr {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
}

impl NodeKind {
    /// Expression kinds may appear as operands, arguments and clauses.
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::FunctionCall { .. }
                | NodeKind::StringLiteral { .. }
                | NodeKind::NumberLiteral { .. }
                | NodeKind::Identifier { .. }
                | NodeKind::BinaryExpr { .. }
        )
    }

    /// A call with an attached block.
    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::FunctionCall { block: Some(_), .. })
    }

    /// Short tag used by dumps and logs.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Root { .. } => "Root",
            NodeKind::Block { .. } => "Block",
            NodeKind::If { .. } => "If",
            NodeKind::For { .. } => "For",
            NodeKind::FunctionCall { .. } => "FunctionCall",
            NodeKind::StringLiteral { .. } => "StringLiteral",
            NodeKind::NumberLiteral { .. } => "NumberLiteral",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::BinaryExpr { .. } => "BinaryExpr",
        }
    }
}

/// A tree node with the position of the token that produced it.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub pos: Position,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, pos: Position, span: Span) -> Self {
        Node { kind, pos, span }
    }
}

/// Owner of every node, child list and string of one compilation.
#[derive(Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
    lists: Vec<NodeId>,
    strings: Arena,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `arena` for string storage.
    pub fn with_arena(arena: Arena) -> Self {
        Ast {
            nodes: Vec::new(),
            lists: Vec::new(),
            strings: arena,
        }
    }

    pub fn alloc(&mut self, node: Node) -> Result<NodeId, ArenaError> {
        let id = NodeId(to_u32(self.nodes.len(), "node")?);
        self.nodes.push(node);
        Ok(id)
    }

    /// Store `ids` as one contiguous child list.
    pub fn alloc_list(&mut self, ids: &[NodeId]) -> Result<NodeRange, ArenaError> {
        if ids.is_empty() {
            return Ok(NodeRange::EMPTY);
        }
        let start = to_u32(self.lists.len(), "child list")?;
        let len = to_u32(ids.len(), "child list length")?;
        self.lists.extend_from_slice(ids);
        Ok(NodeRange { start, len })
    }

    /// Copy `text` into the string arena.
    pub fn alloc_str(&mut self, text: &str) -> Result<ArenaStr, ArenaError> {
        self.strings.string_dup(text)
    }

    /// Attach a container block to a call node.
    ///
    /// Returns `false` (and changes nothing) if `call` is not a call.
    pub fn attach_block(&mut self, call: NodeId, body: NodeId) -> bool {
        match &mut self.nodes[call.index()].kind {
            NodeKind::FunctionCall { block, .. } => {
                *block = Some(body);
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    #[inline]
    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        let start = range.start as usize;
        &self.lists[start..start + range.len()]
    }

    #[inline]
    pub fn text(&self, s: ArenaStr) -> &str {
        self.strings.get_str(s)
    }

    /// Name of an identifier or call, if `id` is one.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Identifier { name } | NodeKind::FunctionCall { name, .. } => {
                Some(self.text(*name))
            }
            _ => None,
        }
    }

    /// All present children of `id` in source order.
    ///
    /// This is the uniform traversal interface: call arguments come before
    /// the attached block, `If`/`For` slots in declaration order.
    pub fn children(&self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        let mut out = SmallVec::new();
        match *self.kind(id) {
            NodeKind::Root { children } | NodeKind::Block { children } => {
                out.extend_from_slice(self.list(children));
            }
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => out.extend([condition, then_branch, else_branch].into_iter().flatten()),
            NodeKind::For {
                init,
                condition,
                increment,
                body,
            } => out.extend([init, condition, increment, body].into_iter().flatten()),
            NodeKind::FunctionCall { args, block, .. } => {
                out.extend_from_slice(self.list(args));
                out.extend(block);
            }
            NodeKind::BinaryExpr { left, right, .. } => {
                out.push(left);
                out.push(right);
            }
            NodeKind::StringLiteral { .. }
            | NodeKind::NumberLiteral { .. }
            | NodeKind::Identifier { .. } => {}
        }
        out
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.strings
    }
}

fn to_u32(index: usize, what: &'static str) -> Result<u32, ArenaError> {
    u32::try_from(index).map_err(|_| ArenaError::IndexOverflow { what, index })
}
