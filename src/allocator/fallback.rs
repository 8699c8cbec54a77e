//! Primary/fallback composition
//!
//! The composition logic of the crate: every request is routed, per
//! operation, to the delegate that can actually satisfy it. Routing is
//! stateless - the composer keeps no per-block bookkeeping and re-derives
//! the responsible delegate from `owns` on every call, which is why `owns`
//! must be a cheap, side-effect-free predicate.
//!
//! # Safety
//!
//! ## Invariants
//!
//! - The primary's `owns` is always consulted first; the fallback may
//!   claim ownership conservatively (the system heap does), so the order
//!   is load-bearing.
//! - Migration is copy-then-commit: the old block is not freed - not even
//!   touched - until the replacement region is fully populated, so a
//!   failure anywhere leaves the caller's block exactly as it was.
//! - A block that has migrated to the fallback never returns to the
//!   primary; its remaining lifetime is served entirely by the fallback.

use core::mem;
use core::ptr;

use tracing::{debug, trace};

use crate::allocator::BlockAllocator;
use crate::block::Block;

/// Composes two building blocks into a primary-first strategy.
///
/// `allocate` tries the primary and falls back on exhaustion; the
/// ownership-changing operations route to whichever delegate owns the
/// block. When a resize outgrows the primary, the block migrates to the
/// fallback - bytes preserved, old region released - and stays there.
///
/// The composer owns both delegates for its whole lifetime and never
/// exposes them; all interaction goes through the capability contract, so
/// compositions nest: a `FallbackAllocator` is itself a valid primary or
/// fallback for another one.
pub struct FallbackAllocator<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackAllocator<P, F>
where
    P: BlockAllocator,
    F: BlockAllocator,
{
    /// Composes `primary` and `fallback` into one allocator.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

// SAFETY: every operation is forwarded to exactly one owning delegate, so
// the contract guarantees of the delegates carry over; the migration path
// populates the replacement region completely before releasing the old
// one, preserving all-or-nothing failure semantics.
unsafe impl<P, F> BlockAllocator for FallbackAllocator<P, F>
where
    P: BlockAllocator,
    F: BlockAllocator,
{
    fn allocate(&mut self, size: usize) -> Block {
        if size == 0 {
            return Block::empty();
        }
        let block = self.primary.allocate(size);
        if !block.is_empty() {
            return block;
        }
        trace!(size, "primary exhausted, serving from fallback");
        self.fallback.allocate(size)
    }

    unsafe fn deallocate(&mut self, block: &mut Block) {
        if block.is_empty() {
            return;
        }
        if self.primary.owns(block) {
            // SAFETY: primary owns the block (caller contract + predicate).
            unsafe { self.primary.deallocate(block) }
        } else {
            // SAFETY: the block came from this composition and not from
            // the primary, so the fallback produced it.
            unsafe { self.fallback.deallocate(block) }
        }
    }

    unsafe fn reallocate(&mut self, block: &mut Block, new_size: usize) -> bool {
        if new_size == block.len() {
            return true;
        }
        if block.is_empty() {
            // `new_size` is non-zero here (the equal-length case above
            // covers zero), so this is a plain allocation.
            *block = self.allocate(new_size);
            return !block.is_empty();
        }

        if self.primary.owns(block) {
            // SAFETY: primary owns the block (caller contract + predicate).
            if unsafe { self.primary.reallocate(block, new_size) } {
                return true;
            }

            // The primary cannot resize in place; migrate to the fallback.
            // Allocate and copy before releasing anything, so a failure
            // here leaves the caller's block untouched.
            let fresh = self.fallback.allocate(new_size);
            if fresh.is_empty() {
                trace!(new_size, "fallback could not satisfy migration");
                return false;
            }
            let preserved = block.len().min(new_size);
            debug!(
                old_len = block.len(),
                new_size, "migrating block from primary to fallback"
            );
            // SAFETY: the source range is live primary-owned memory and
            // the destination is a fresh fallback region; the delegates
            // manage disjoint memory, so the ranges cannot overlap.
            // `preserved` is within both lengths.
            unsafe {
                ptr::copy_nonoverlapping(block.as_ptr() as *const u8, fresh.as_ptr(), preserved);
            }
            let mut retired = mem::replace(block, fresh);
            // SAFETY: `retired` is the primary-owned block we just copied
            // out of; the caller's token now describes the new region.
            unsafe { self.primary.deallocate(&mut retired) };
            return true;
        }

        // Fallback-owned: no migration back to the primary. The primary is
        // bounded, and a block that has fallen back stays with the
        // fallback for its remaining lifetime.
        // SAFETY: the block came from this composition and not from the
        // primary, so the fallback produced it.
        unsafe { self.fallback.reallocate(block, new_size) }
    }

    unsafe fn expand(&mut self, block: &mut Block, delta: usize) -> bool {
        // Routed like deallocate, never migrated: expand is strictly
        // in-place by contract, and a moving expand would just be a
        // reallocate the caller did not ask for.
        if self.primary.owns(block) {
            // SAFETY: primary owns the block (caller contract + predicate).
            unsafe { self.primary.expand(block, delta) }
        } else {
            // SAFETY: not primary-owned, so the fallback produced it.
            unsafe { self.fallback.expand(block, delta) }
        }
    }

    fn owns(&self, block: &Block) -> bool {
        self.primary.owns(block) || self.fallback.owns(block)
    }
}
