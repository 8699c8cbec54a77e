//! The capability contract every building block implements
//!
//! The contract is the whole interface surface of this crate: five
//! operations with fixed failure semantics. Composing allocators
//! ([`FallbackAllocator`] and any future wrapper) rely on every clause
//! below holding for every implementation, so the clauses are normative,
//! not advisory.
//!
//! # Safety
//!
//! The trait is `unsafe` to implement because composition depends on
//! guarantees the compiler cannot check:
//!
//! - `allocate` returns either the empty block or a block describing
//!   exactly the requested number of bytes, exclusively owned by the
//!   caller until handed back.
//! - `owns` is a pure predicate with no side effects and is `false` for
//!   the empty block.
//! - `reallocate` and `expand` leave the caller's block byte-for-byte and
//!   pointer-for-pointer unchanged on failure.
//! - `deallocate` leaves the canonical empty block behind and accepts an
//!   already-empty block as a no-op.
//!
//! [`FallbackAllocator`]: super::FallbackAllocator

use crate::block::Block;

/// Uniform allocation contract shared by all building blocks.
///
/// Exhaustion is never an error value or a panic: `allocate` signals it
/// with an empty [`Block`], `reallocate` and `expand` with `false`.
///
/// Receivers are exclusive (`&mut self`) - the building blocks are
/// single-threaded value types with no internal synchronization, and the
/// borrow checker enforces exactly that discipline. Thread safety, where
/// required, is a wrapper satisfying this same contract.
///
/// # Safety
///
/// Implementations must uphold the contract documented at the module
/// level. Callers of the `unsafe` methods must only pass blocks obtained
/// from this exact allocator instance (or the empty block); anything else
/// is undefined behavior. Implementations may `debug_assert!` on such
/// misuse but must not corrupt unrelated state in release builds.
pub unsafe trait BlockAllocator {
    /// Allocates `size` bytes.
    ///
    /// Returns the empty block for `size == 0` (defined behavior, not an
    /// error) and on exhaustion. The returned memory is uninitialized.
    fn allocate(&mut self, size: usize) -> Block;

    /// Releases `block` and leaves the empty block in its place.
    ///
    /// An already-empty block is a no-op.
    ///
    /// # Safety
    /// `block` must have been produced by this allocator instance and not
    /// released since.
    unsafe fn deallocate(&mut self, block: &mut Block);

    /// Resizes `block` to exactly `new_size` bytes, moving data if the
    /// implementation must.
    ///
    /// On success the block is updated in place and bytes up to
    /// `min(old_len, new_size)` are preserved. `new_size == block.len()`
    /// is a no-op success, `new_size == 0` is equivalent to
    /// [`deallocate`](Self::deallocate), and an empty block is populated
    /// as if by [`allocate`](Self::allocate). On failure the block is
    /// completely unchanged.
    ///
    /// # Safety
    /// Same requirement as [`deallocate`](Self::deallocate). A successful
    /// call may invalidate the old pointer; the caller must not retain
    /// copies of it.
    unsafe fn reallocate(&mut self, block: &mut Block, new_size: usize) -> bool;

    /// Grows `block` by exactly `delta` bytes without moving it.
    ///
    /// `delta == 0` is a no-op success. Building blocks without a cheap
    /// in-place growth guarantee inherit this default, which refuses any
    /// non-zero delta - a moving "expand" would just be a
    /// [`reallocate`](Self::reallocate), and callers must ask for that
    /// explicitly.
    ///
    /// # Safety
    /// Same requirement as [`deallocate`](Self::deallocate).
    unsafe fn expand(&mut self, block: &mut Block, delta: usize) -> bool {
        let _ = block;
        delta == 0
    }

    /// Reports whether this allocator is responsible for `block`.
    ///
    /// Pure predicate: no side effects, `false` for the empty block.
    fn owns(&self, block: &Block) -> bool;
}

// SAFETY: forwards every call to the underlying T, so all contract
// guarantees are preserved through delegation.
unsafe impl<T: BlockAllocator + ?Sized> BlockAllocator for &mut T {
    fn allocate(&mut self, size: usize) -> Block {
        (**self).allocate(size)
    }

    unsafe fn deallocate(&mut self, block: &mut Block) {
        // SAFETY: same contract as T::deallocate, upheld by our caller.
        unsafe { (**self).deallocate(block) }
    }

    unsafe fn reallocate(&mut self, block: &mut Block, new_size: usize) -> bool {
        // SAFETY: same contract as T::reallocate, upheld by our caller.
        unsafe { (**self).reallocate(block, new_size) }
    }

    unsafe fn expand(&mut self, block: &mut Block, delta: usize) -> bool {
        // SAFETY: same contract as T::expand, upheld by our caller.
        unsafe { (**self).expand(block, delta) }
    }

    fn owns(&self, block: &Block) -> bool {
        (**self).owns(block)
    }
}
