use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The two operands of a reduction do not have the same number of elements.
    #[error("dimension mismatch: left operand has {left} elements, right operand has {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The allocator refused a buffer of `len` elements.
    #[error("failed to allocate a buffer of {len} elements ({bytes} bytes)")]
    Allocation { len: usize, bytes: usize },
}
