//! Shared capability-contract helpers for the integration suites
//!
//! Every building block is exercised with the same three moves: fill a
//! block with a recognizable reference pattern, assert that a prefix of
//! the pattern survived an operation, and verify that deallocation leaves
//! the canonical empty block behind.

#![allow(dead_code)] // each test binary uses its own subset

use alloc_toolbox::allocator::BlockAllocator;
use alloc_toolbox::Block;

/// Reference byte for position `i`.
///
/// Cycles with period 251 (prime) so a block accidentally shifted by a
/// power of two cannot still match the pattern.
pub fn reference_byte(i: usize) -> u8 {
    (i % 251) as u8
}

/// Fills the whole block with the reference pattern.
pub fn fill_with_reference_data(block: &Block) {
    assert!(!block.is_empty(), "cannot fill the empty block");
    for i in 0..block.len() {
        // SAFETY: i < block.len(), so the write stays inside the block.
        unsafe { block.as_ptr().add(i).write(reference_byte(i)) };
    }
}

/// Asserts that the first `len` bytes of the block still hold the
/// reference pattern.
pub fn assert_matches_reference(block: &Block, len: usize) {
    assert!(len <= block.len(), "checking beyond the block's length");
    for i in 0..len {
        // SAFETY: i < len <= block.len(), so the read stays inside the block.
        let byte = unsafe { block.as_ptr().add(i).read() };
        assert_eq!(byte, reference_byte(i), "byte {i} diverged from the reference pattern");
    }
}

/// Deallocates the block and verifies it is the canonical empty block
/// afterwards.
pub fn deallocate_and_expect_empty<A: BlockAllocator>(alloc: &mut A, block: &mut Block) {
    // SAFETY: callers only pass blocks produced by `alloc`.
    unsafe { alloc.deallocate(block) };
    assert_eq!(*block, Block::empty(), "deallocate must leave the empty block");
}
