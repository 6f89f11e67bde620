use crate::{
    api::{BufferAlloc, BufferAllocBytes, DotProduct, ModuleNew},
    error::LayoutError,
    layouts::{Backend, Buffer, BufferToRef, Module, Scalar},
    oep::{BufferAllocBytesImpl, BufferAllocImpl, DotProductImpl, ModuleNewImpl},
};

impl<B> ModuleNew<B> for Module<B>
where
    B: Backend + ModuleNewImpl<B>,
{
    fn new() -> Self {
        B::new_impl()
    }
}

impl<B> BufferAllocBytes for Module<B>
where
    B: Backend + BufferAllocBytesImpl<B>,
{
    fn buffer_alloc_bytes<T: Scalar>(&self, len: usize) -> Option<usize> {
        B::buffer_alloc_bytes_impl::<T>(self, len)
    }
}

impl<B> BufferAlloc for Module<B>
where
    B: Backend + BufferAllocImpl<B>,
{
    fn buffer_alloc<T: Scalar>(&self, len: usize) -> Result<Buffer<T>, LayoutError> {
        B::buffer_alloc_impl::<T>(self, len)
    }
}

impl<B, T> DotProduct<T> for Module<B>
where
    B: Backend + DotProductImpl<B, T>,
    T: Scalar,
{
    fn dot_product<A, C>(&self, a: &A, b: &C) -> Result<T, LayoutError>
    where
        A: BufferToRef<T> + ?Sized,
        C: BufferToRef<T> + ?Sized,
    {
        let a: &[T] = a.to_ref();
        let b: &[T] = b.to_ref();

        if a.len() != b.len() {
            return Err(LayoutError::DimensionMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        Ok(B::dot_product_impl(self, a, b))
    }
}
