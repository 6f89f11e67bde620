use crate::{
    api::{BufferAlloc, BufferAllocBytes},
    error::LayoutError,
    layouts::{Backend, Buffer, Module},
};

pub fn test_buffer_alloc<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc + BufferAllocBytes,
{
    for len in [0usize, 1, 3, 64, 1000] {
        let a: Buffer<i32> = module.buffer_alloc(len).unwrap();
        assert_eq!(a.len(), len);
        assert!(a.iter().all(|&x| x == 0));

        let b: Buffer<f64> = module.buffer_alloc(len).unwrap();
        assert_eq!(b.len(), len);
        assert!(b.iter().all(|&x| x == 0.0));

        assert_eq!(module.buffer_alloc_bytes::<i32>(len), Some(len * 4));
        assert_eq!(module.buffer_alloc_bytes::<f64>(len), Some(len * 8));
    }
}

pub fn test_buffer_alloc_refused<B: Backend>(module: &Module<B>)
where
    Module<B>: BufferAlloc + BufferAllocBytes,
{
    let len: usize = usize::MAX / 2;
    match module.buffer_alloc::<i64>(len) {
        Err(LayoutError::Allocation { len: got, .. }) => assert_eq!(got, len),
        other => panic!("expected allocation error, got {other:?}"),
    }
    assert_eq!(module.buffer_alloc_bytes::<i64>(len), None);
}
