use itertools::izip;

use crate::layouts::Scalar;

/// Sum of elementwise products, accumulated left to right.
#[inline(always)]
pub fn dot_ref<T: Scalar>(a: &[T], b: &[T]) -> T {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
    }

    izip!(a, b).fold(T::ZERO, |acc, (&x, &y)| T::mul_acc(acc, x, y))
}

pub fn dot_i32_ref(a: &[i32], b: &[i32]) -> i32 {
    dot_ref(a, b)
}

pub fn dot_i64_ref(a: &[i64], b: &[i64]) -> i64 {
    dot_ref(a, b)
}

pub fn dot_f32_ref(a: &[f32], b: &[f32]) -> f32 {
    dot_ref(a, b)
}

pub fn dot_f64_ref(a: &[f64], b: &[f64]) -> f64 {
    dot_ref(a, b)
}

/// Four independent accumulators over 4-element blocks, then the tail.
///
/// Only used for scalars whose accumulation is associative, otherwise falls
/// back to [dot_ref] so the summation order is unchanged.
pub fn dot_unrolled<T: Scalar>(a: &[T], b: &[T]) -> T {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
    }

    if !T::ASSOCIATIVE {
        return dot_ref(a, b);
    }

    let a_blocks = a.chunks_exact(4);
    let b_blocks = b.chunks_exact(4);
    let a_tail: &[T] = a_blocks.remainder();
    let b_tail: &[T] = b_blocks.remainder();

    let mut acc: [T; 4] = [T::ZERO; 4];
    izip!(a_blocks, b_blocks).for_each(|(x, y)| {
        acc[0] = T::mul_acc(acc[0], x[0], y[0]);
        acc[1] = T::mul_acc(acc[1], x[1], y[1]);
        acc[2] = T::mul_acc(acc[2], x[2], y[2]);
        acc[3] = T::mul_acc(acc[3], x[3], y[3]);
    });

    let head: T = T::add(T::add(acc[0], acc[1]), T::add(acc[2], acc[3]));
    T::add(head, dot_ref(a_tail, b_tail))
}
