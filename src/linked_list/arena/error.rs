use thiserror::Error;

/// Failures reported by fallible list operations.
///
/// A failed operation leaves every list it was handed exactly as it found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The allocator could not provide room for another node.
    #[error("out of memory while allocating list nodes")]
    AllocationFailure,

    /// The duplicate hook refused to copy the value at `position`.
    #[error("duplicate hook failed on the value at position {position}")]
    DuplicateCallbackFailure {
        /// Zero-based position of the value, counted from the head.
        position: usize,
    },
}
