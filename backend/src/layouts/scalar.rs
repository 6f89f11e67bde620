use std::fmt::{Debug, Display};

/// Element type of a [`crate::layouts::Buffer`].
pub trait Scalar: Copy + Default + PartialEq + Debug + Display + Send + Sync + 'static {
    /// Additive identity.
    const ZERO: Self;

    /// Type label used in logs and error messages.
    const NAME: &'static str;

    /// `true` when `mul_acc` is associative and commutative, i.e. the
    /// accumulation order cannot change the result. Holds for wrapping
    /// integers, not for IEEE floats.
    const ASSOCIATIVE: bool;

    /// Returns `acc + a * b` in the scalar's native arithmetic.
    fn mul_acc(acc: Self, a: Self, b: Self) -> Self;

    /// Returns `a + b` in the scalar's native arithmetic.
    fn add(a: Self, b: Self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const NAME: &'static str = stringify!($t);
                const ASSOCIATIVE: bool = true;

                #[inline(always)]
                fn mul_acc(acc: Self, a: Self, b: Self) -> Self {
                    acc.wrapping_add(a.wrapping_mul(b))
                }

                #[inline(always)]
                fn add(a: Self, b: Self) -> Self {
                    a.wrapping_add(b)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const NAME: &'static str = stringify!($t);
                const ASSOCIATIVE: bool = false;

                #[inline(always)]
                fn mul_acc(acc: Self, a: Self, b: Self) -> Self {
                    acc + a * b
                }

                #[inline(always)]
                fn add(a: Self, b: Self) -> Self {
                    a + b
                }
            }
        )*
    };
}

impl_scalar_int!(i32, i64);
impl_scalar_float!(f32, f64);
