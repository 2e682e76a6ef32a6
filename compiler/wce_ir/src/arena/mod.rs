//! Bump arena for compilation-lifetime data.
//!
//! The arena hands out 8-byte-aligned byte ranges from a growing list of
//! blocks. Individual allocations are never freed; everything is released
//! together when the arena is dropped (or consumed by [`Arena::destroy`]).
//!
//! # Layout
//!
//! Each block is a boxed byte slice over-allocated by `ALIGNMENT - 1`
//! bytes, so an aligned base can always be found inside it. The block
//! records its own usable capacity: a block created for an oversized
//! request is larger than the default, and the bump cursor must check
//! against that block's real size.
//!
//! Allocations are addressed by [`ArenaPtr`] handles (block, offset, len)
//! rather than raw pointers, so the arena stays in safe Rust and the
//! borrow checker ties every slice to the arena's lifetime.

use std::fmt;

/// Alignment of every allocation, in bytes.
pub const ALIGNMENT: usize = 8;

/// Smallest block the arena will create.
pub const MIN_BLOCK_SIZE: usize = 1024;

/// Block size used by [`Arena::default`].
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Failure to grow compilation-lifetime storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("arena out of memory: could not allocate a block for {requested} bytes")]
    OutOfMemory { requested: usize },
    #[error("arena allocation of {requested} bytes exceeds the maximum block size")]
    TooLarge { requested: usize },
    /// Node or child-list storage outgrew its `u32` handles.
    #[error("syntax tree {what} index {index} does not fit in a u32 handle")]
    IndexOverflow { what: &'static str, index: usize },
}

/// Handle to a byte range inside an [`Arena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArenaPtr {
    block: u32,
    offset: u32,
    len: u32,
}

impl ArenaPtr {
    /// Index of the block that holds this allocation.
    #[inline]
    pub fn block(self) -> usize {
        self.block as usize
    }

    /// Requested size in bytes (before alignment padding).
    #[inline]
    pub fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Handle to a UTF-8 string copied into an [`Arena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArenaStr(ArenaPtr);

impl ArenaStr {
    #[inline]
    pub fn len(self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

struct Block {
    storage: Box<[u8]>,
    /// Offset of the first aligned byte within `storage`.
    base: usize,
    /// Usable bytes starting at `base`.
    capacity: usize,
}

impl Block {
    fn try_new(capacity: usize) -> Result<Self, ArenaError> {
        let total = capacity
            .checked_add(ALIGNMENT - 1)
            .ok_or(ArenaError::TooLarge { requested: capacity })?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(total)
            .map_err(|_| ArenaError::OutOfMemory { requested: capacity })?;
        storage.resize(total, 0u8);
        let storage = storage.into_boxed_slice();

        let addr = storage.as_ptr() as usize;
        let base = (ALIGNMENT - addr % ALIGNMENT) % ALIGNMENT;

        Ok(Block {
            storage,
            base,
            capacity,
        })
    }
}

/// Append-only bump allocator.
pub struct Arena {
    blocks: Vec<Block>,
    /// Bump cursor within the last block.
    offset: usize,
    default_block_size: usize,
    allocated: usize,
}

impl Arena {
    /// Create an arena whose ordinary blocks hold `default_block_size` bytes.
    ///
    /// Sizes below [`MIN_BLOCK_SIZE`] are raised to it. No memory is
    /// requested until the first allocation.
    pub fn new(default_block_size: usize) -> Self {
        Arena {
            blocks: Vec::new(),
            offset: 0,
            default_block_size: default_block_size.max(MIN_BLOCK_SIZE),
            allocated: 0,
        }
    }

    /// Reserve `size` bytes, rounded up to [`ALIGNMENT`].
    ///
    /// Served from the current block when it has room; otherwise a new
    /// block of `max(aligned_size, default_block_size)` becomes current.
    /// Earlier blocks are never revisited.
    pub fn alloc(&mut self, size: usize) -> Result<ArenaPtr, ArenaError> {
        let aligned = align_up(size).ok_or(ArenaError::TooLarge { requested: size })?;
        let len = u32::try_from(size).map_err(|_| ArenaError::TooLarge { requested: size })?;

        let fits = self
            .blocks
            .last()
            .is_some_and(|block| block.capacity - self.offset >= aligned);

        if !fits {
            let capacity = aligned.max(self.default_block_size);
            if u32::try_from(capacity).is_err() {
                return Err(ArenaError::TooLarge { requested: size });
            }
            let block = Block::try_new(capacity)?;
            self.blocks
                .try_reserve(1)
                .map_err(|_| ArenaError::OutOfMemory { requested: size })?;
            self.blocks.push(block);
            self.offset = 0;
        }

        let block = u32::try_from(self.blocks.len() - 1)
            .map_err(|_| ArenaError::TooLarge { requested: size })?;
        // Both fit in u32: the block's capacity was checked when it was created.
        let offset = u32::try_from(self.offset).unwrap_or(u32::MAX);

        self.offset += aligned;
        self.allocated += aligned;

        Ok(ArenaPtr { block, offset, len })
    }

    /// Copy `text` into the arena.
    pub fn string_dup(&mut self, text: &str) -> Result<ArenaStr, ArenaError> {
        let ptr = self.alloc(text.len())?;
        self.bytes_mut(ptr).copy_from_slice(text.as_bytes());
        Ok(ArenaStr(ptr))
    }

    /// Bytes of an allocation.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` was produced by a different arena.
    pub fn bytes(&self, ptr: ArenaPtr) -> &[u8] {
        let block = &self.blocks[ptr.block()];
        let start = block.base + ptr.offset as usize;
        &block.storage[start..start + ptr.len()]
    }

    /// Mutable bytes of an allocation.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` was produced by a different arena.
    pub fn bytes_mut(&mut self, ptr: ArenaPtr) -> &mut [u8] {
        let block = &mut self.blocks[ptr.block()];
        let start = block.base + ptr.offset as usize;
        &mut block.storage[start..start + ptr.len()]
    }

    /// Text of a string previously copied with [`Arena::string_dup`].
    pub fn get_str(&self, s: ArenaStr) -> &str {
        // Only valid UTF-8 is ever written through `string_dup`.
        std::str::from_utf8(self.bytes(s.0)).unwrap_or_default()
    }

    /// Absolute address of an allocation's first byte.
    pub fn address(&self, ptr: ArenaPtr) -> usize {
        let block = &self.blocks[ptr.block()];
        block.storage.as_ptr() as usize + block.base + ptr.offset as usize
    }

    /// Release every block. Equivalent to dropping the arena.
    pub fn destroy(self) {
        drop(self);
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Capacity of block `index`, if it exists.
    pub fn block_capacity(&self, index: usize) -> Option<usize> {
        self.blocks.get(index).map(|block| block.capacity)
    }

    /// Total bytes handed out, alignment padding included.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.allocated
    }

    /// Total usable bytes across all blocks.
    pub fn capacity_bytes(&self) -> usize {
        self.blocks.iter().map(|block| block.capacity).sum()
    }

    #[inline]
    pub fn default_block_size(&self) -> usize {
        self.default_block_size
    }
}

impl Default for Arena {
    fn default() -> Self {
        Arena::new(DEFAULT_BLOCK_SIZE)
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("blocks", &self.blocks.len())
            .field("allocated", &self.allocated)
            .field("capacity", &self.capacity_bytes())
            .finish()
    }
}

#[inline]
fn align_up(size: usize) -> Option<usize> {
    Some(size.checked_add(ALIGNMENT - 1)? & !(ALIGNMENT - 1))
}
