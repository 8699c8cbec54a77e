//! The `Block` value type shared by every building block
//!
//! A [`Block`] is a capability token: it describes one live allocation (or
//! the canonical empty state) but carries no logic and does not free itself.
//! Allocators hand blocks out and take them back; the caller is responsible
//! for not using a block after it has been deallocated or migrated.

use core::ptr::{self, NonNull};

/// Describes one allocation as a `(pointer, length)` pair, or nothing.
///
/// Invariant: `len == 0` exactly when the pointer is absent. The empty block
/// is the single, unambiguous failure value returned by `allocate` - a
/// zero-length request and delegate exhaustion both yield it.
///
/// `Block` is deliberately neither `Copy` nor `Clone`: duplicating a block
/// would create two tokens for the same region and invite a double free.
#[derive(Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Block {
    ptr: Option<NonNull<u8>>,
    len: usize,
}

impl Block {
    /// Returns the canonical empty block `{null, 0}`.
    #[inline]
    pub const fn empty() -> Self {
        Self { ptr: None, len: 0 }
    }

    /// Builds a block describing `len` bytes starting at `ptr`.
    ///
    /// Intended for allocator implementations; `len` must be non-zero
    /// (use [`Block::empty`] for the empty state).
    #[inline]
    pub fn from_raw_parts(ptr: NonNull<u8>, len: usize) -> Self {
        debug_assert!(len > 0, "a non-empty block must have a non-zero length");
        Self { ptr: Some(ptr), len }
    }

    /// `true` if this is the empty block.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ptr.is_none()
    }

    /// Length of the described region in bytes; `0` for the empty block.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Raw pointer to the first byte, or null for the empty block.
    #[inline]
    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Pointer to the first byte, if any.
    #[inline]
    pub fn as_non_null(&self) -> Option<NonNull<u8>> {
        self.ptr
    }

    /// Address of the first byte, or `0` for the empty block.
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        self.as_ptr() as usize
    }

    /// Forgets the described region, leaving the empty block behind.
    ///
    /// Used by `deallocate` implementations after the region has been
    /// released; the memory itself is not touched.
    #[inline]
    pub(crate) fn reset(&mut self) {
        *self = Self::empty();
    }

    /// Adjusts the recorded length after an in-place resize.
    ///
    /// The block must be non-empty and `len` non-zero; the pointer is
    /// unchanged.
    #[inline]
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(!self.is_empty() && len > 0);
        self.len = len;
    }
}
