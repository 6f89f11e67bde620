use crate::{
    error::LayoutError,
    layouts::{Buffer, Scalar},
};

pub fn buffer_alloc_bytes_ref<T: Scalar>(len: usize) -> Option<usize> {
    Buffer::<T>::bytes_of(len)
}

pub fn buffer_alloc_ref<T: Scalar>(len: usize) -> Result<Buffer<T>, LayoutError> {
    Buffer::try_zeroed(len)
}
