use crate::layouts::{Backend, Buffer, Module, Scalar};
use crate::error::LayoutError;

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::ModuleNew] for corresponding public API.
/// # Safety
/// The returned module must be usable with every other extension point the
/// backend implements.
pub unsafe trait ModuleNewImpl<B: Backend> {
    fn new_impl() -> Module<B>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::BufferAllocBytes] for corresponding public API.
/// # Safety
/// Must return the exact byte footprint used by [BufferAllocImpl::buffer_alloc_impl].
pub unsafe trait BufferAllocBytesImpl<B: Backend> {
    fn buffer_alloc_bytes_impl<T: Scalar>(module: &Module<B>, len: usize) -> Option<usize>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::buffer::buffer_alloc_ref] for reference code.
/// * See [crate::api::BufferAlloc] for corresponding public API.
/// # Safety
/// Every returned element must be initialized and the length must equal `len`.
pub unsafe trait BufferAllocImpl<B: Backend> {
    fn buffer_alloc_impl<T: Scalar>(module: &Module<B>, len: usize) -> Result<Buffer<T>, LayoutError>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::dot::dot_ref] for reference code.
/// * See [crate::api::DotProduct] for corresponding public API.
/// # Safety
/// Callers guarantee `a.len() == b.len()`. Implementations must read no
/// element past that length and must return the same value as
/// [crate::reference::dot::dot_ref] for every input.
pub unsafe trait DotProductImpl<B: Backend, T: Scalar> {
    fn dot_product_impl(module: &Module<B>, a: &[T], b: &[T]) -> T;
}
