use std::{fmt, marker::PhantomData};

pub trait Backend: Sized + Sync + Send + 'static {
    /// Short label used in logs and benchmark group names.
    const NAME: &'static str;
}

/// Handle through which [`crate::api`] traits are dispatched to a backend.
///
/// The module carries no state: every backend shipped in this crate is
/// stateless, so the handle is zero-sized and free to construct.
pub struct Module<B: Backend> {
    _marker: PhantomData<B>,
}

impl<B: Backend> Module<B> {
    #[inline]
    pub fn new_marker() -> Self {
        Self { _marker: PhantomData }
    }

    #[inline]
    pub fn backend_name(&self) -> &'static str {
        B::NAME
    }
}

impl<B: Backend> Clone for Module<B> {
    fn clone(&self) -> Self {
        Self::new_marker()
    }
}

impl<B: Backend> Copy for Module<B> {}

impl<B: Backend> fmt::Debug for Module<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Module<{}>", B::NAME)
    }
}
