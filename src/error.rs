//! Error types for allocator construction
//!
//! Operation-level failure is always reported in-band - an empty [`Block`]
//! from `allocate`, `false` from `reallocate`/`expand` - because allocators
//! sit on hot paths where unwinding is undesirable. `AllocError` therefore
//! only covers the one place where a `Result` is appropriate: building an
//! allocator with parameters that can never work.
//!
//! [`Block`]: crate::block::Block

use thiserror::Error;

/// Result type for fallible allocator construction.
pub type AllocResult<T> = core::result::Result<T, AllocError>;

/// Errors reported when an allocator cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The backing region would have zero capacity.
    #[error("allocator capacity cannot be zero")]
    ZeroCapacity,

    /// The backing region would exceed the addressable object size.
    #[error("region of {requested} bytes exceeds the maximum object size")]
    RegionTooLarge {
        /// Capacity that was requested.
        requested: usize,
    },
}
