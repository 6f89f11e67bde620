use crate::{
    error::LayoutError,
    layouts::{Buffer, Scalar},
};

pub trait BufferAllocBytes {
    /// Returns the number of bytes backing a buffer of `len` elements of `T`.
    fn buffer_alloc_bytes<T: Scalar>(&self, len: usize) -> Option<usize>;
}

pub trait BufferAlloc {
    /// Allocates a zeroed buffer of exactly `len` elements.
    ///
    /// Returns [`LayoutError::Allocation`] instead of aborting when the
    /// request cannot be satisfied.
    fn buffer_alloc<T: Scalar>(&self, len: usize) -> Result<Buffer<T>, LayoutError>;
}
