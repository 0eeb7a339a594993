use crate::types::GLuint;

/// Allocates and recycles API object handles.
///
/// Handle `0` is reserved by the API as the null object and is never
/// returned. Freed handles are recycled on subsequent allocations.
///
/// # Example
///
/// ```ignore
/// let mut alloc = HandleAllocator::new();
/// let a = alloc.alloc();  // 1
/// let b = alloc.alloc();  // 2
/// alloc.free(a);          // 1 is now available
/// let c = alloc.alloc();  // 1 (recycled)
/// ```
pub struct HandleAllocator {
    free_list: Vec<GLuint>,
    next_id: GLuint,
    len: u32,
}

impl HandleAllocator {
    /// Create a new empty allocator
    pub fn new() -> Self {
        Self {
            free_list: Vec::new(),
            next_id: 1,
            len: 0,
        }
    }

    /// Allocate the next available handle (never 0)
    pub fn alloc(&mut self) -> GLuint {
        self.len += 1;
        self.free_list.pop().unwrap_or_else(|| {
            let id = self.next_id;
            self.next_id += 1;
            id
        })
    }

    /// Return a handle to the pool for reuse
    pub fn free(&mut self, id: GLuint) {
        debug_assert!(id != 0 && id < self.next_id, "freeing an unallocated handle: {}", id);
        self.len -= 1;
        self.free_list.push(id);
    }

    /// Highest handle ever allocated + 1.
    ///
    /// Any handle at or above this value has never been handed out.
    pub fn high_water_mark(&self) -> GLuint {
        self.next_id
    }

    /// Number of live handles
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether no handles are live
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for HandleAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "handle_allocator_tests.rs"]
mod tests;
