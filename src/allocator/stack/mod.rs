//! Fixed-region stack allocator with LIFO reclamation
//!
//! ## Modules
//! - `allocator` - the [`StackAllocator`] implementation
//! - `config` - debug fill-pattern configuration

pub mod allocator;
pub mod config;

pub use allocator::StackAllocator;
pub use config::StackConfig;
