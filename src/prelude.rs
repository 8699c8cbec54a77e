//! Convenient re-exports for working with the building blocks.

pub use crate::allocator::{
    BlockAllocator, FallbackAllocator, StackAllocator, StackConfig, SystemAllocator,
};
pub use crate::block::Block;
pub use crate::error::{AllocError, AllocResult};
