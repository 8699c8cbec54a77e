//! Fixed-region stack allocator
//!
//! Bump allocation over a fixed `N`-byte region with LIFO reclamation:
//! a cursor marks the first free byte, every allocation advances it, and
//! only freeing the most recent allocation rewinds it. Freeing anything
//! else is a legal no-op - the range stays dead until everything above it
//! on the stack is also freed or the region is reset. This is deferred
//! reclamation, not a leak in the allocator; callers that need eager
//! reclamation should free in reverse allocation order.
//!
//! # Safety
//!
//! ## Invariants
//!
//! - `cursor <= N` at all times; the cursor only moves past bytes that
//!   have been handed out.
//! - Every issued pointer lies within `[base, base + N)` and ranges of
//!   live blocks never overlap.
//! - The backing buffer is heap-allocated, so its address is stable even
//!   when the `StackAllocator` value itself moves.
//! - The buffer is wrapped in `UnsafeCell` bytes: callers legitimately
//!   write through raw pointers they obtained earlier while the allocator
//!   is borrowed again, and `UnsafeCell` is what makes those writes
//!   defined.

use core::cell::UnsafeCell;
use core::fmt;
use core::ptr::{self, NonNull};

use super::StackConfig;
use crate::allocator::BlockAllocator;
use crate::block::Block;
use crate::error::{AllocError, AllocResult};

/// Fixed-capacity stack allocator over an `N`-byte region.
///
/// The primary, fast, bounded building block: allocation is a cursor
/// bump, reclamation is a cursor rewind, and data is never moved - a
/// resize that cannot be satisfied in place simply fails, which is what
/// lets [`FallbackAllocator`](crate::allocator::FallbackAllocator) decide
/// to migrate the block elsewhere.
///
/// The capacity is part of the type, matching the compile-time style of
/// composition: `FallbackAllocator<StackAllocator<32>, SystemAllocator>`
/// is a complete allocation strategy with no runtime configuration.
pub struct StackAllocator<const N: usize> {
    /// Backing region; boxed so issued pointers survive moves of `self`.
    memory: Box<[UnsafeCell<u8>]>,
    /// Offset of the first free byte.
    cursor: usize,
    config: StackConfig,
}

// Manual impl: dumping the raw region bytes would be noise, so report the
// usage counters instead.
impl<const N: usize> fmt::Debug for StackAllocator<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackAllocator")
            .field("capacity", &N)
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}

impl<const N: usize> StackAllocator<N> {
    /// Creates a stack allocator with the default configuration.
    pub fn new() -> AllocResult<Self> {
        Self::with_config(StackConfig::default())
    }

    /// Creates a stack allocator with a custom configuration.
    pub fn with_config(config: StackConfig) -> AllocResult<Self> {
        if N == 0 {
            return Err(AllocError::ZeroCapacity);
        }
        if N > isize::MAX as usize {
            return Err(AllocError::RegionTooLarge { requested: N });
        }

        let memory: Box<[UnsafeCell<u8>]> = (0..N).map(|_| UnsafeCell::new(0u8)).collect();

        Ok(Self {
            memory,
            cursor: 0,
            config,
        })
    }

    /// First byte of the region.
    ///
    /// `UnsafeCell<u8>` is `repr(transparent)`, so the slice start is the
    /// region start. Deriving the pointer from the cells (rather than
    /// caching a raw pointer at construction) keeps writes through
    /// caller-held block pointers defined while the allocator is borrowed
    /// again.
    #[inline]
    fn base(&self) -> *mut u8 {
        self.memory.as_ptr() as *mut u8
    }

    /// Total capacity of the region in bytes.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Bytes between the region start and the cursor.
    ///
    /// Includes dead ranges owed to non-top frees that have not been
    /// rewound past yet.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Bytes available for allocation.
    pub fn available(&self) -> usize {
        N - self.cursor
    }

    /// Rewinds the region to completely empty.
    ///
    /// # Safety
    /// Every block previously produced by this allocator becomes invalid;
    /// the caller must have released or forgotten all of them.
    pub unsafe fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Offset of `block`'s first byte from the region start.
    #[inline]
    fn offset_of(&self, block: &Block) -> usize {
        block.addr() - self.base() as usize
    }

    /// `true` if `block` is the most recent live allocation.
    #[inline]
    fn is_top(&self, block: &Block) -> bool {
        !block.is_empty() && block.addr() + block.len() == self.base() as usize + self.cursor
    }

    /// Writes `pattern` over `[start, start + len)` within the region.
    #[inline]
    fn fill(&mut self, start: usize, len: usize, pattern: Option<u8>) {
        if let Some(byte) = pattern {
            debug_assert!(start + len <= N);
            // SAFETY: the range lies within the owned region (asserted
            // above) and we hold `&mut self`, so no live reference to the
            // buffer exists; the bytes are UnsafeCells, so raw writes are
            // permitted regardless of outstanding caller pointers.
            unsafe { ptr::write_bytes(self.base().add(start), byte, len) };
        }
    }
}

// SAFETY: allocate hands out disjoint in-bounds ranges and advances the
// cursor past them; deallocate/reallocate/expand only rewind or extend the
// cursor for the top block, so failure paths never touch caller state.
unsafe impl<const N: usize> BlockAllocator for StackAllocator<N> {
    fn allocate(&mut self, size: usize) -> Block {
        if size == 0 {
            return Block::empty();
        }
        let Some(new_cursor) = self.cursor.checked_add(size) else {
            return Block::empty();
        };
        if new_cursor > N {
            // Capacity exhausted; this allocator never grows.
            return Block::empty();
        }

        let start = self.cursor;
        self.fill(start, size, self.config.alloc_pattern);
        self.cursor = new_cursor;

        // SAFETY: start < N, so the offset stays inside the allocated
        // region and cannot wrap.
        let ptr = unsafe { self.base().add(start) };
        match NonNull::new(ptr) {
            Some(ptr) => Block::from_raw_parts(ptr, size),
            None => Block::empty(),
        }
    }

    unsafe fn deallocate(&mut self, block: &mut Block) {
        if block.is_empty() {
            return;
        }
        debug_assert!(self.owns(block), "block was not produced by this region");

        if self.is_top(block) {
            let start = self.offset_of(block);
            let len = block.len();
            self.cursor = start;
            self.fill(start, len, self.config.dealloc_pattern);
        }
        // A non-top free reclaims nothing: the range stays dead until a
        // later top-aligned free rewinds past it. The caller's token is
        // consumed either way.
        block.reset();
    }

    unsafe fn reallocate(&mut self, block: &mut Block, new_size: usize) -> bool {
        if new_size == block.len() {
            return true;
        }
        if new_size == 0 {
            // SAFETY: forwarded caller contract; the block came from here.
            unsafe { self.deallocate(block) };
            return true;
        }
        if block.is_empty() {
            *block = self.allocate(new_size);
            return !block.is_empty();
        }

        debug_assert!(self.owns(block), "block was not produced by this region");

        if new_size < block.len() {
            if self.is_top(block) {
                // Shrinking the top frees the tail immediately.
                let tail = self.offset_of(block) + new_size;
                let reclaimed = self.cursor - tail;
                self.cursor = tail;
                self.fill(tail, reclaimed, self.config.dealloc_pattern);
            }
            // Off the top, the tail bytes stay dead but unreclaimed.
            block.set_len(new_size);
            return true;
        }

        // Growth never moves data here - there is no second buffer to move
        // into - so it either extends in place or fails outright.
        let delta = new_size - block.len();
        // SAFETY: forwarded caller contract; the block came from here.
        unsafe { self.expand(block, delta) }
    }

    unsafe fn expand(&mut self, block: &mut Block, delta: usize) -> bool {
        if delta == 0 {
            return true;
        }
        if block.is_empty() {
            let fresh = self.allocate(delta);
            if fresh.is_empty() {
                return false;
            }
            *block = fresh;
            return true;
        }

        debug_assert!(self.owns(block), "block was not produced by this region");

        if !self.is_top(block) {
            // In-place growth would run into the allocation above.
            return false;
        }
        let Some(new_cursor) = self.cursor.checked_add(delta) else {
            return false;
        };
        if new_cursor > N {
            return false;
        }

        let tail = self.cursor;
        self.fill(tail, delta, self.config.alloc_pattern);
        self.cursor = new_cursor;
        block.set_len(block.len() + delta);
        true
    }

    fn owns(&self, block: &Block) -> bool {
        if block.is_empty() {
            return false;
        }
        let addr = block.addr();
        addr >= self.base() as usize && addr < self.base() as usize + N
    }
}
