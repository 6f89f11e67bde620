use crate::{
    error::LayoutError,
    layouts::{BufferToRef, Scalar},
};

pub trait DotProduct<T: Scalar> {
    /// Returns `sum(a[i] * b[i])` over all indices.
    ///
    /// Fails with [`LayoutError::DimensionMismatch`] when `a` and `b` do not
    /// hold the same number of elements; nothing is read in that case.
    fn dot_product<A, C>(&self, a: &A, b: &C) -> Result<T, LayoutError>
    where
        A: BufferToRef<T> + ?Sized,
        C: BufferToRef<T> + ?Sized;
}
