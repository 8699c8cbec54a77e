//! Process-heap delegate
//!
//! Wraps `std::alloc::System` in the capability contract so the heap can
//! play the fallback role in a composition. All heap blocks use a single
//! fixed alignment (malloc parity), which keeps [`Block`] a bare
//! `(pointer, length)` pair - no per-block layout bookkeeping.

use core::alloc::{GlobalAlloc, Layout};
use core::ptr::NonNull;
use std::alloc::System;

use crate::allocator::BlockAllocator;
use crate::block::Block;

/// Alignment used for every heap block, matching what `malloc` guarantees
/// on mainstream 64-bit platforms.
const HEAP_ALIGN: usize = 16;

/// Thin delegate to the system heap.
///
/// The universal fallback: it is stateless, it can (almost) always
/// allocate, and its blocks are guaranteed to lie outside any
/// [`StackAllocator`](super::StackAllocator) region - which is what makes
/// pointer-range ownership checks in a composition unambiguous.
///
/// Its [`owns`](BlockAllocator::owns) is conservatively `true` for any
/// non-empty block: the heap exposes no cheap per-pointer provenance, so
/// composing code must always test the primary's `owns` first and treat
/// this allocator as the last resort.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl SystemAllocator {
    /// Creates the delegate; zero-cost, the type has no state.
    #[inline]
    pub const fn new() -> Self {
        SystemAllocator
    }

    /// Layout for a heap block of `size` bytes, if representable.
    #[inline]
    fn layout_for(size: usize) -> Option<Layout> {
        Layout::from_size_align(size, HEAP_ALIGN).ok()
    }
}

// SAFETY: delegates to the system heap, which returns valid exclusive
// regions; failed reallocations leave the original region intact, so the
// caller's block is only rewritten on success.
unsafe impl BlockAllocator for SystemAllocator {
    fn allocate(&mut self, size: usize) -> Block {
        if size == 0 {
            return Block::empty();
        }
        let Some(layout) = Self::layout_for(size) else {
            return Block::empty();
        };
        // SAFETY: layout has non-zero size and valid alignment.
        let ptr = unsafe { System.alloc(layout) };
        match NonNull::new(ptr) {
            Some(ptr) => Block::from_raw_parts(ptr, size),
            None => Block::empty(), // heap exhaustion
        }
    }

    unsafe fn deallocate(&mut self, block: &mut Block) {
        if block.is_empty() {
            return;
        }
        if let Some(layout) = Self::layout_for(block.len()) {
            // SAFETY: a non-empty block from this allocator was produced
            // by `System.alloc` with exactly this layout (caller contract).
            unsafe { System.dealloc(block.as_ptr(), layout) };
        }
        block.reset();
    }

    unsafe fn reallocate(&mut self, block: &mut Block, new_size: usize) -> bool {
        if new_size == block.len() {
            return true;
        }
        if new_size == 0 {
            // SAFETY: forwarded caller contract.
            unsafe { self.deallocate(block) };
            return true;
        }
        if block.is_empty() {
            *block = self.allocate(new_size);
            return !block.is_empty();
        }
        let Some(old_layout) = Self::layout_for(block.len()) else {
            return false;
        };
        if Self::layout_for(new_size).is_none() {
            return false;
        }

        // SAFETY: the block was produced by `System.alloc` with
        // `old_layout` (caller contract); `new_size` is non-zero and
        // representable. On failure `realloc` leaves the original region
        // untouched, so the caller's block stays valid.
        let ptr = unsafe { System.realloc(block.as_ptr(), old_layout, new_size) };
        match NonNull::new(ptr) {
            Some(ptr) => {
                *block = Block::from_raw_parts(ptr, new_size);
                true
            }
            None => false,
        }
    }

    // `expand` keeps the refusing default: the heap offers no cheap
    // in-place growth guarantee.

    fn owns(&self, block: &Block) -> bool {
        !block.is_empty()
    }
}
