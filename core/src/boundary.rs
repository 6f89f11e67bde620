//! Dot product entry points as invoked by the host.
//!
//! One call queries the length of each operand, converts both lists into
//! freshly allocated buffers and reduces them through [`DotProduct`]. The
//! buffers are dropped on every path out of the call.

use exmatrix_backend::{
    api::{BufferAlloc, DotProduct},
    layouts::{Backend, Buffer, Module},
};
use tracing::{debug, instrument};

use crate::{
    config::ConvertOptions,
    convert::{FromTerm, list_to_buffer},
    error::DotError,
    host::HostEnv,
};

/// Σ a\[i\] * b\[i\] over two host lists of the same length.
///
/// Fails with [`DotError::NotAList`] if an argument is not a proper list and
/// with [`DotError::DimensionMismatch`] if the lengths differ. The second
/// list is only converted once both lengths are known to agree.
#[instrument(level = "debug", skip_all, fields(backend = B::NAME, scalar = T::NAME))]
pub fn dot_product<H, B, T>(
    env: &H,
    module: &Module<B>,
    a: H::Term,
    b: H::Term,
    opts: &ConvertOptions,
) -> Result<T, DotError>
where
    H: HostEnv,
    B: Backend,
    T: FromTerm,
    Module<B>: BufferAlloc + DotProduct<T>,
{
    let len_a: usize = env.list_length(a).ok_or(DotError::NotAList { argument: 0 })?;
    let buf_a: Buffer<T> = list_to_buffer(env, module, a, len_a, opts)?;

    let len_b: usize = env.list_length(b).ok_or(DotError::NotAList { argument: 1 })?;
    if len_a != len_b {
        debug!(len_a, len_b, "operand lengths differ");
        return Err(DotError::DimensionMismatch {
            left: len_a,
            right: len_b,
        });
    }
    let buf_b: Buffer<T> = list_to_buffer(env, module, b, len_b, opts)?;

    let res: T = module.dot_product(&buf_a, &buf_b)?;
    debug!(len = len_a, "dot product done");
    Ok(res)
}

/// Integer dot product with 32-bit wraparound.
pub fn dot_product_i32<H, B>(env: &H, module: &Module<B>, a: H::Term, b: H::Term, opts: &ConvertOptions) -> Result<i32, DotError>
where
    H: HostEnv,
    B: Backend,
    Module<B>: BufferAlloc + DotProduct<i32>,
{
    dot_product(env, module, a, b, opts)
}

pub fn dot_product_i64<H, B>(env: &H, module: &Module<B>, a: H::Term, b: H::Term, opts: &ConvertOptions) -> Result<i64, DotError>
where
    H: HostEnv,
    B: Backend,
    Module<B>: BufferAlloc + DotProduct<i64>,
{
    dot_product(env, module, a, b, opts)
}

/// Float dot product, accumulated left to right without fused multiply-add.
pub fn dot_product_f64<H, B>(env: &H, module: &Module<B>, a: H::Term, b: H::Term, opts: &ConvertOptions) -> Result<f64, DotError>
where
    H: HostEnv,
    B: Backend,
    Module<B>: BufferAlloc + DotProduct<f64>,
{
    dot_product(env, module, a, b, opts)
}

#[cfg(test)]
mod tests {
    use exmatrix_backend::{CpuRef, CpuUnrolled, api::ModuleNew, reference::dot::dot_i32_ref};
    use proptest::prelude::*;

    use super::*;
    use crate::{
        config::Coercion,
        error::ConversionError,
        host::{Term, TermHeap},
    };

    fn module() -> Module<CpuRef> {
        Module::<CpuRef>::new()
    }

    fn ints(env: &mut TermHeap, a: &[i64], b: &[i64]) -> (Term, Term) {
        (env.list_i64(a), env.list_i64(b))
    }

    #[test]
    fn integer_scenarios() {
        let opts: ConvertOptions = ConvertOptions::default();
        let cases: [(&[i64], &[i64], i32); 3] = [
            (&[1, 2, 3], &[4, 5, 6], 32),
            (&[0, 0, 0], &[7, 8, 9], 0),
            (&[-1, 2, -3], &[4, -5, 6], -32),
        ];
        for (a, b, want) in cases {
            let mut env = TermHeap::new();
            let (ta, tb) = ints(&mut env, a, b);
            assert_eq!(dot_product_i32(&env, &module(), ta, tb, &opts), Ok(want));
        }
    }

    #[test]
    fn float_scenario() {
        let mut env = TermHeap::new();
        let a: Term = env.list_f64(&[1.5, 2.5]);
        let b: Term = env.list_f64(&[2.0, 4.0]);
        assert_eq!(
            dot_product_f64(&env, &module(), a, b, &ConvertOptions::default()),
            Ok(13.0)
        );
    }

    #[test]
    fn empty_operands_give_zero() {
        let mut env = TermHeap::new();
        let (a, b) = ints(&mut env, &[], &[]);
        assert_eq!(dot_product_i64(&env, &module(), a, b, &ConvertOptions::default()), Ok(0));
        assert_eq!(dot_product_f64(&env, &module(), a, b, &ConvertOptions::default()), Ok(0.0));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut env = TermHeap::new();
        let (a, b) = ints(&mut env, &[1, 2, 3], &[4, 5]);
        assert_eq!(
            dot_product_i32(&env, &module(), a, b, &ConvertOptions::default()),
            Err(DotError::DimensionMismatch { left: 3, right: 2 })
        );
        assert_eq!(
            dot_product_i32(&env, &module(), b, a, &ConvertOptions::default()),
            Err(DotError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn non_list_argument_is_named() {
        let mut env = TermHeap::new();
        let list: Term = env.list_i64(&[1, 2]);
        let atom: Term = env.atom("ok");
        assert_eq!(
            dot_product_i32(&env, &module(), atom, list, &ConvertOptions::default()),
            Err(DotError::NotAList { argument: 0 })
        );
        assert_eq!(
            dot_product_i32(&env, &module(), list, atom, &ConvertOptions::default()),
            Err(DotError::NotAList { argument: 1 })
        );
    }

    #[test]
    fn non_numeric_element_in_second_operand() {
        let mut env = TermHeap::new();
        let a: Term = env.list_i64(&[1, 2, 3]);
        let four: Term = env.int(4);
        let half: Term = env.float(0.5);
        let six: Term = env.int(6);
        let b: Term = env.list(&[four, half, six]);
        assert_eq!(
            dot_product_i32(&env, &module(), a, b, &ConvertOptions::default()),
            Err(ConversionError::NotNumeric {
                position: 1,
                target: "i32"
            }
            .into())
        );
    }

    #[test]
    fn integers_widen_into_float_operands_on_request() {
        let mut env = TermHeap::new();
        let a: Term = env.list_i64(&[1, 2]);
        let b: Term = env.list_f64(&[0.5, 0.25]);

        assert!(matches!(
            dot_product_f64(&env, &module(), a, b, &ConvertOptions::default()),
            Err(DotError::Conversion(ConversionError::NotNumeric { position: 0, .. }))
        ));

        let widen: ConvertOptions = ConvertOptions::builder()
            .coercion(Coercion::WidenIntegers)
            .build()
            .unwrap();
        assert_eq!(dot_product_f64(&env, &module(), a, b, &widen), Ok(1.0));
    }

    #[test]
    fn max_len_rejects_first_operand() {
        let mut env = TermHeap::new();
        let (a, b) = ints(&mut env, &[1, 2, 3, 4], &[1, 1, 1, 1]);
        let opts: ConvertOptions = ConvertOptions::builder().max_len(3).build().unwrap();
        assert_eq!(
            dot_product_i64(&env, &module(), a, b, &opts),
            Err(DotError::Allocation { len: 4 })
        );

        let at_limit: ConvertOptions = ConvertOptions::builder().max_len(4).build().unwrap();
        assert_eq!(dot_product_i64(&env, &module(), a, b, &at_limit), Ok(10));
    }

    #[test]
    fn order_is_preserved_through_conversion() {
        let mut env = TermHeap::new();
        let a: Term = env.list_i64(&[1, 2, 3]);
        let b: Term = env.list_i64(&[4, 5, 6]);
        let b_rev: Term = env.list_i64(&[6, 5, 4]);
        let opts: ConvertOptions = ConvertOptions::default();
        assert_eq!(dot_product_i32(&env, &module(), a, b, &opts), Ok(32));
        assert_eq!(dot_product_i32(&env, &module(), a, b_rev, &opts), Ok(28));
    }

    #[test]
    fn integer_overflow_wraps() {
        let mut env = TermHeap::new();
        let max: i64 = i32::MAX as i64;
        let (a, b) = ints(&mut env, &[max, 1], &[1, 1]);
        assert_eq!(
            dot_product_i32(&env, &module(), a, b, &ConvertOptions::default()),
            Ok(i32::MIN)
        );
    }

    proptest! {
        #[test]
        fn matches_reference_kernel(pairs in prop::collection::vec((any::<i32>(), any::<i32>()), 0..64)) {
            let (xs, ys): (Vec<i32>, Vec<i32>) = pairs.into_iter().unzip();
            let mut env = TermHeap::new();
            let a: Term = env.list_i64(&xs.iter().map(|&x| x as i64).collect::<Vec<i64>>());
            let b: Term = env.list_i64(&ys.iter().map(|&y| y as i64).collect::<Vec<i64>>());

            let want: i32 = dot_i32_ref(&xs, &ys);
            let opts: ConvertOptions = ConvertOptions::default();
            prop_assert_eq!(dot_product_i32(&env, &module(), a, b, &opts), Ok(want));
            prop_assert_eq!(dot_product_i32(&env, &Module::<CpuUnrolled>::new(), a, b, &opts), Ok(want));
        }
    }
}
