//! CPU backend with a 4-way unrolled integer reduction.
//!
//! Integer dot products use four independent wrapping accumulators; because
//! wrapping addition is associative the result is bit-identical to
//! [`crate::CpuRef`]. Floating-point reductions keep the reference
//! left-to-right order.

use crate::{
    error::LayoutError,
    layouts::{Backend, Buffer, Module, Scalar},
    oep::{BufferAllocBytesImpl, BufferAllocImpl, DotProductImpl, ModuleNewImpl},
    reference::{
        buffer::{buffer_alloc_bytes_ref, buffer_alloc_ref},
        dot::dot_unrolled,
    },
};

pub struct CpuUnrolled {}

impl Backend for CpuUnrolled {
    const NAME: &'static str = "cpu_unrolled";
}

unsafe impl ModuleNewImpl<Self> for CpuUnrolled {
    fn new_impl() -> Module<Self> {
        Module::new_marker()
    }
}

unsafe impl BufferAllocBytesImpl<Self> for CpuUnrolled {
    fn buffer_alloc_bytes_impl<T: Scalar>(_module: &Module<Self>, len: usize) -> Option<usize> {
        buffer_alloc_bytes_ref::<T>(len)
    }
}

unsafe impl BufferAllocImpl<Self> for CpuUnrolled {
    fn buffer_alloc_impl<T: Scalar>(_module: &Module<Self>, len: usize) -> Result<Buffer<T>, LayoutError> {
        buffer_alloc_ref::<T>(len)
    }
}

unsafe impl<T: Scalar> DotProductImpl<Self, T> for CpuUnrolled {
    fn dot_product_impl(_module: &Module<Self>, a: &[T], b: &[T]) -> T {
        dot_unrolled(a, b)
    }
}
