//! Composable memory-allocation building blocks
//!
//! This crate provides small, single-purpose allocators that compose through
//! generics rather than virtual dispatch. Every building block implements the
//! same capability contract ([`allocator::BlockAllocator`]): `allocate`,
//! `deallocate`, `reallocate`, `expand` and the side-effect-free ownership
//! predicate `owns`. Because the contract's failure semantics are identical
//! everywhere, wrapping one allocator inside another preserves correctness:
//! deallocation is routed to the allocator that actually produced a block,
//! resizes either succeed completely or leave the caller's block untouched,
//! and data survives migration between delegates byte for byte.
//!
//! The building blocks:
//!
//! - [`Block`] - a `(pointer, length)` value describing one live allocation
//!   or the canonical empty state. Allocation failure is an empty block,
//!   never a panic.
//! - [`allocator::StackAllocator`] - a fixed-capacity region with a bump
//!   cursor and LIFO reclamation. Fast, bounded, never moves data.
//! - [`allocator::SystemAllocator`] - a thin delegate to the process heap;
//!   the allocator of last resort.
//! - [`allocator::FallbackAllocator`] - the composition: tries its primary
//!   first, routes to its fallback on exhaustion, and migrates blocks
//!   between the two when a resize outgrows the primary.
//!
//! # Example
//!
//! ```
//! use alloc_toolbox::prelude::*;
//!
//! let mut alloc = FallbackAllocator::new(
//!     StackAllocator::<64>::new()?,
//!     SystemAllocator::new(),
//! );
//!
//! let mut small = alloc.allocate(16); // served by the stack region
//! let mut large = alloc.allocate(128); // exceeds the region, heap serves it
//! assert!(!small.is_empty());
//! assert!(!large.is_empty());
//!
//! // SAFETY: both blocks were produced by this allocator.
//! unsafe {
//!     alloc.deallocate(&mut small);
//!     alloc.deallocate(&mut large);
//! }
//! assert!(small.is_empty());
//! # Ok::<(), alloc_toolbox::AllocError>(())
//! ```
//!
//! # What this crate is not
//!
//! The building blocks are purely mechanical: they execute exactly the
//! operation requested and report success or failure in-band. There is no
//! garbage collection, no lifetime tracking, and no internal locking -
//! thread safety, if needed, is a wrapper concern layered on top of the
//! same contract.

#![warn(missing_docs)]

pub mod allocator;
pub mod block;
pub mod error;
pub mod prelude;

pub use block::Block;
pub use error::{AllocError, AllocResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
