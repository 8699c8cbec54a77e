//! Stack allocator configuration

/// Configuration for [`StackAllocator`](super::StackAllocator).
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Byte written over freshly allocated ranges, for spotting reads of
    /// uninitialized memory.
    pub alloc_pattern: Option<u8>,

    /// Byte written over reclaimed ranges, for spotting use-after-free.
    pub dealloc_pattern: Option<u8>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            alloc_pattern: if cfg!(debug_assertions) { Some(0xCC) } else { None },
            dealloc_pattern: if cfg!(debug_assertions) { Some(0xDD) } else { None },
        }
    }
}

impl StackConfig {
    /// Production configuration - no fill patterns, minimal overhead.
    pub fn production() -> Self {
        Self {
            alloc_pattern: None,
            dealloc_pattern: None,
        }
    }

    /// Debug configuration - poison patterns on allocation and reclamation.
    pub fn debug() -> Self {
        Self {
            alloc_pattern: Some(0xCC),
            dealloc_pattern: Some(0xDD),
        }
    }
}
