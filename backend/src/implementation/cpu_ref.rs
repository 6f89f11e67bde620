//! Portable reference backend.
//!
//! [`CpuRef`] implements every extension point by calling straight into
//! [`crate::reference`]. It is the correctness oracle the other backends are
//! compared against.

use crate::{
    error::LayoutError,
    layouts::{Backend, Buffer, Module, Scalar},
    oep::{BufferAllocBytesImpl, BufferAllocImpl, DotProductImpl, ModuleNewImpl},
    reference::{
        buffer::{buffer_alloc_bytes_ref, buffer_alloc_ref},
        dot::dot_ref,
    },
};

/// Reference CPU backend.
pub struct CpuRef {}

impl Backend for CpuRef {
    const NAME: &'static str = "cpu_ref";
}

unsafe impl ModuleNewImpl<Self> for CpuRef {
    fn new_impl() -> Module<Self> {
        Module::new_marker()
    }
}

unsafe impl BufferAllocBytesImpl<Self> for CpuRef {
    fn buffer_alloc_bytes_impl<T: Scalar>(_module: &Module<Self>, len: usize) -> Option<usize> {
        buffer_alloc_bytes_ref::<T>(len)
    }
}

unsafe impl BufferAllocImpl<Self> for CpuRef {
    fn buffer_alloc_impl<T: Scalar>(_module: &Module<Self>, len: usize) -> Result<Buffer<T>, LayoutError> {
        buffer_alloc_ref::<T>(len)
    }
}

unsafe impl<T: Scalar> DotProductImpl<Self, T> for CpuRef {
    fn dot_product_impl(_module: &Module<Self>, a: &[T], b: &[T]) -> T {
        dot_ref(a, b)
    }
}
