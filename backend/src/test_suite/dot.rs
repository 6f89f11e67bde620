use exmatrix_sampling::{distributions::Distributions, source::Source};
use rug::Rational;

use crate::{
    api::DotProduct,
    error::LayoutError,
    layouts::{Backend, Module},
};

const MAX_LEN: usize = 300;

fn random_i32(source: &mut Source, len: usize) -> Vec<i32> {
    (0..len).map(|_| source.next_i32()).collect()
}

fn random_i64(source: &mut Source, len: usize) -> Vec<i64> {
    (0..len).map(|_| source.next_i64()).collect()
}

fn random_f64(source: &mut Source, len: usize) -> Vec<f64> {
    let dist: Distributions = Distributions::normal(1.0).unwrap();
    // Spread magnitudes over several orders so cancellation actually happens.
    (0..len)
        .map(|_| dist.sample_f64(source) * 10f64.powi(source.next_u64n(7, 7) as i32 - 3))
        .collect()
}

/// Exact `sum(a[i] * b[i])` in multi-precision rationals.
pub fn dot_f64_exact(a: &[f64], b: &[f64]) -> Rational {
    let mut sum: Rational = Rational::new();
    for (x, y) in a.iter().zip(b) {
        let x: Rational = Rational::from_f64(*x).unwrap();
        let y: Rational = Rational::from_f64(*y).unwrap();
        sum += Rational::from(&x * &y);
    }
    sum
}

/// Checks `|have - exact| <= 2 * n * eps * sum(|a[i] * b[i]|)`.
pub fn assert_f64_within_rounding(have: f64, a: &[f64], b: &[f64]) {
    let exact: Rational = dot_f64_exact(a, b);
    let abs_sum: f64 = a.iter().zip(b).map(|(x, y)| (x * y).abs()).sum();
    let bound: f64 = 2.0 * (a.len() as f64 + 1.0) * f64::EPSILON * abs_sum;
    let diff: Rational = (Rational::from_f64(have).unwrap() - &exact).abs();
    assert!(
        diff <= Rational::from_f64(bound).unwrap(),
        "have={have} exact={} bound={bound}",
        exact.to_f64()
    );
}

pub fn test_dot_product_scenarios<B: Backend>(module: &Module<B>)
where
    Module<B>: DotProduct<i32> + DotProduct<f64>,
{
    let cases: [([i32; 3], [i32; 3], i32); 3] = [
        ([1, 2, 3], [4, 5, 6], 32),
        ([0, 0, 0], [7, 8, 9], 0),
        ([-1, 2, -3], [4, -5, 6], -32),
    ];

    for (a, b, want) in cases {
        assert_eq!(DotProduct::<i32>::dot_product(module, &a, &b), Ok(want));
    }

    let a: [f64; 2] = [1.5, 2.5];
    let b: [f64; 2] = [2.0, 4.0];
    assert_eq!(DotProduct::<f64>::dot_product(module, &a, &b), Ok(13.0));
}

pub fn test_dot_product_empty<B: Backend>(module: &Module<B>)
where
    Module<B>: DotProduct<i32> + DotProduct<i64> + DotProduct<f32> + DotProduct<f64>,
{
    let e_i32: [i32; 0] = [];
    let e_i64: [i64; 0] = [];
    let e_f32: [f32; 0] = [];
    let e_f64: [f64; 0] = [];
    assert_eq!(DotProduct::<i32>::dot_product(module, &e_i32, &e_i32), Ok(0));
    assert_eq!(DotProduct::<i64>::dot_product(module, &e_i64, &e_i64), Ok(0));
    assert_eq!(DotProduct::<f32>::dot_product(module, &e_f32, &e_f32), Ok(0.0));
    assert_eq!(DotProduct::<f64>::dot_product(module, &e_f64, &e_f64), Ok(0.0));
}

pub fn test_dot_product_dimension_mismatch<B: Backend>(module: &Module<B>)
where
    Module<B>: DotProduct<i32> + DotProduct<f64>,
{
    let a: [i32; 3] = [1, 2, 3];
    let b: [i32; 2] = [4, 5];
    assert_eq!(
        DotProduct::<i32>::dot_product(module, &a, &b),
        Err(LayoutError::DimensionMismatch { left: 3, right: 2 })
    );
    assert_eq!(
        DotProduct::<i32>::dot_product(module, &b, &a),
        Err(LayoutError::DimensionMismatch { left: 2, right: 3 })
    );

    let empty: [f64; 0] = [];
    assert_eq!(
        DotProduct::<f64>::dot_product(module, &empty, &[1.0]),
        Err(LayoutError::DimensionMismatch { left: 0, right: 1 })
    );
}

pub fn test_dot_product_order_sensitive<B: Backend>(module: &Module<B>)
where
    Module<B>: DotProduct<i32>,
{
    let a: Vec<i32> = vec![1, 2, 3];
    let a_rev: Vec<i32> = a.iter().rev().copied().collect();
    let b: Vec<i32> = vec![4, 5, 6];
    assert_eq!(module.dot_product(&a, &b), Ok(32));
    assert_eq!(module.dot_product(&a_rev, &b), Ok(28));
}

pub fn test_dot_product_random_i32<B: Backend>(module: &Module<B>)
where
    Module<B>: DotProduct<i32>,
{
    // Lengths come from the root stream, operands from a branch per case, so
    // the sequence of lengths does not depend on how much each case draws.
    let mut source: Source = Source::new([0u8; 32]);
    for _ in 0..64 {
        let len: usize = source.next_len(MAX_LEN);
        let mut operands: Source = source.branch();
        let a: Vec<i32> = random_i32(&mut operands, len);
        let b: Vec<i32> = random_i32(&mut operands, len);

        // Wrapping i32 arithmetic is arithmetic mod 2^32, so truncating the
        // exact sum gives the expected value.
        let want: i32 = a
            .iter()
            .zip(&b)
            .map(|(&x, &y)| x as i128 * y as i128)
            .sum::<i128>() as i32;

        assert_eq!(module.dot_product(&a, &b), Ok(want));
    }
}

pub fn test_dot_product_random_i64<B: Backend>(module: &Module<B>)
where
    Module<B>: DotProduct<i64>,
{
    let mut source: Source = Source::new([1u8; 32]);
    for _ in 0..64 {
        let len: usize = source.next_len(MAX_LEN);
        let mut operands: Source = source.branch();
        let a: Vec<i64> = random_i64(&mut operands, len);
        let b: Vec<i64> = random_i64(&mut operands, len);

        let want: i64 = a
            .iter()
            .zip(&b)
            .fold(0i128, |acc, (&x, &y)| acc.wrapping_add(x as i128 * y as i128)) as i64;

        assert_eq!(module.dot_product(&a, &b), Ok(want));
    }
}

pub fn test_dot_product_random_f64<B: Backend>(module: &Module<B>)
where
    Module<B>: DotProduct<f64>,
{
    let mut source: Source = Source::new([2u8; 32]);
    for _ in 0..64 {
        let len: usize = source.next_len(MAX_LEN);
        let mut operands: Source = source.branch();
        let a: Vec<f64> = random_f64(&mut operands, len);
        let b: Vec<f64> = random_f64(&mut operands, len);
        let have: f64 = module.dot_product(&a, &b).unwrap();
        assert_f64_within_rounding(have, &a, &b);
    }
}

pub fn test_dot_product_cross_i32<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: DotProduct<i32>,
    Module<BT>: DotProduct<i32>,
{
    let mut source: Source = Source::new([3u8; 32]);
    for len in 0..=MAX_LEN / 10 {
        let a: Vec<i32> = random_i32(&mut source, len);
        let b: Vec<i32> = random_i32(&mut source, len);
        assert_eq!(module_ref.dot_product(&a, &b), module_test.dot_product(&a, &b), "len={len}");
    }
}

pub fn test_dot_product_cross_i64<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: DotProduct<i64>,
    Module<BT>: DotProduct<i64>,
{
    let mut source: Source = Source::new([4u8; 32]);
    for len in 0..=MAX_LEN / 10 {
        let a: Vec<i64> = random_i64(&mut source, len);
        let b: Vec<i64> = random_i64(&mut source, len);
        assert_eq!(module_ref.dot_product(&a, &b), module_test.dot_product(&a, &b), "len={len}");
    }
}

pub fn test_dot_product_cross_f64<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: DotProduct<f64>,
    Module<BT>: DotProduct<f64>,
{
    let mut source: Source = Source::new([5u8; 32]);
    for len in 0..=MAX_LEN / 10 {
        let a: Vec<f64> = random_f64(&mut source, len);
        let b: Vec<f64> = random_f64(&mut source, len);
        let have_ref: f64 = module_ref.dot_product(&a, &b).unwrap();
        let have_test: f64 = module_test.dot_product(&a, &b).unwrap();
        assert_eq!(have_ref.to_bits(), have_test.to_bits(), "len={len}");
    }
}
