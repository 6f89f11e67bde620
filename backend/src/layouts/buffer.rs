use std::fmt;

use crate::{error::LayoutError, layouts::Scalar};

/// Owned, contiguous, fixed-length numeric buffer.
///
/// The length is fixed at allocation: a buffer never grows or shrinks, and
/// every slot is initialized. Dropping the buffer releases its storage.
#[derive(Clone, PartialEq)]
pub struct Buffer<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Buffer<T> {
    /// Number of bytes backing a buffer of `len` elements, `None` on overflow.
    pub fn bytes_of(len: usize) -> Option<usize> {
        len.checked_mul(size_of::<T>())
    }

    /// Allocates `len` zeroed elements, returning an error instead of aborting
    /// when the allocator refuses the request.
    pub fn try_zeroed(len: usize) -> Result<Self, LayoutError> {
        let alloc_err = || LayoutError::Allocation {
            len,
            bytes: Self::bytes_of(len).unwrap_or(usize::MAX),
        };
        let mut data: Vec<T> = Vec::new();
        data.try_reserve_exact(len).map_err(|_| alloc_err())?;
        data.resize(len, T::ZERO);
        Ok(Self { data })
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Scalar> From<Vec<T>> for Buffer<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Scalar> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T: Scalar> fmt::Display for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer<{}>(len={}): [", T::NAME, self.len())?;

        let max_show = 32;
        for (i, x) in self.data.iter().take(max_show).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }

        if self.len() > max_show {
            write!(f, ", ... ({} more)", self.len() - max_show)?;
        }

        write!(f, "]")
    }
}

/// Read-only slice view over anything that stores scalars contiguously.
pub trait BufferToRef<T: Scalar> {
    fn to_ref(&self) -> &[T];
}

impl<T: Scalar> BufferToRef<T> for Buffer<T> {
    fn to_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar> BufferToRef<T> for Vec<T> {
    fn to_ref(&self) -> &[T] {
        self
    }
}

impl<T: Scalar> BufferToRef<T> for [T] {
    fn to_ref(&self) -> &[T] {
        self
    }
}

impl<T: Scalar, const N: usize> BufferToRef<T> for [T; N] {
    fn to_ref(&self) -> &[T] {
        self
    }
}
