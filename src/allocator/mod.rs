//! Allocator building blocks and the capability contract they share
//!
//! Every allocator in this module implements [`BlockAllocator`] with
//! identical failure semantics, which is what makes them composable:
//! [`FallbackAllocator`] can wrap any primary/fallback pair without knowing
//! anything about them beyond the contract.

mod fallback;
mod system;
mod traits;

pub mod stack;

pub use fallback::FallbackAllocator;
pub use stack::{StackAllocator, StackConfig};
pub use system::SystemAllocator;
pub use traits::BlockAllocator;

pub use crate::error::{AllocError, AllocResult};
