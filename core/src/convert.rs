//! Host list → [`Buffer`] conversion.
//!
//! A conversion allocates exactly the declared number of slots, walks the
//! list once from head to tail and writes element `i` into slot `i`. It
//! either fills every slot or fails; a partially written buffer is dropped
//! before the error is returned.

use exmatrix_backend::{
    api::BufferAlloc,
    layouts::{Backend, Buffer, Module, Scalar},
};
use tracing::{instrument, trace};

use crate::{
    config::{Coercion, ConvertOptions},
    error::{ConversionError, DotError},
    host::HostEnv,
};

/// Per-element extraction failure, positioned by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementError {
    NotNumeric,
    OutOfRange,
}

impl ElementError {
    fn at(self, position: usize, target: &'static str) -> ConversionError {
        match self {
            ElementError::NotNumeric => ConversionError::NotNumeric { position, target },
            ElementError::OutOfRange => ConversionError::OutOfRange { position, target },
        }
    }
}

/// Scalars that can be read out of a host term.
pub trait FromTerm: Scalar {
    fn from_term<H: HostEnv>(env: &H, term: H::Term, coercion: Coercion) -> Result<Self, ElementError>;
}

/// Scalars that can be boxed into a host term.
pub trait IntoTerm: Scalar {
    fn into_term<H: HostEnv>(self, env: &mut H) -> H::Term;
}

impl FromTerm for i32 {
    fn from_term<H: HostEnv>(env: &H, term: H::Term, _coercion: Coercion) -> Result<Self, ElementError> {
        match env.get_i32(term) {
            Some(x) => Ok(x),
            None if env.is_integer(term) => Err(ElementError::OutOfRange),
            None => Err(ElementError::NotNumeric),
        }
    }
}

impl FromTerm for i64 {
    fn from_term<H: HostEnv>(env: &H, term: H::Term, _coercion: Coercion) -> Result<Self, ElementError> {
        match env.get_i64(term) {
            Some(x) => Ok(x),
            None if env.is_integer(term) => Err(ElementError::OutOfRange),
            None => Err(ElementError::NotNumeric),
        }
    }
}

impl FromTerm for f64 {
    fn from_term<H: HostEnv>(env: &H, term: H::Term, coercion: Coercion) -> Result<Self, ElementError> {
        if let Some(x) = env.get_f64(term) {
            return Ok(x);
        }

        match coercion {
            Coercion::WidenIntegers if env.is_integer(term) => env
                .get_i64(term)
                .and_then(widen_exact)
                .ok_or(ElementError::OutOfRange),
            _ => Err(ElementError::NotNumeric),
        }
    }
}

/// `x` as `f64`, or `None` when the conversion would round.
fn widen_exact(x: i64) -> Option<f64> {
    let y: f64 = x as f64;
    // i128 because `i64::MAX as f64` is 2^63, which saturates back to i64::MAX.
    (y as i128 == x as i128).then_some(y)
}

impl IntoTerm for i32 {
    fn into_term<H: HostEnv>(self, env: &mut H) -> H::Term {
        env.make_i32(self)
    }
}

impl IntoTerm for i64 {
    fn into_term<H: HostEnv>(self, env: &mut H) -> H::Term {
        env.make_i64(self)
    }
}

impl IntoTerm for f64 {
    fn into_term<H: HostEnv>(self, env: &mut H) -> H::Term {
        env.make_f64(self)
    }
}

/// Converts the host list `list` into a buffer of exactly `expected` elements.
///
/// `expected` comes from a separate [`HostEnv::list_length`] query; the walk
/// re-checks it and fails with [`ConversionError::Truncated`] or
/// [`ConversionError::Overrun`] if the list disagrees.
#[instrument(level = "trace", skip_all, fields(scalar = T::NAME, expected = expected))]
pub fn list_to_buffer<H, B, T>(
    env: &H,
    module: &Module<B>,
    list: H::Term,
    expected: usize,
    opts: &ConvertOptions,
) -> Result<Buffer<T>, DotError>
where
    H: HostEnv,
    B: Backend,
    T: FromTerm,
    Module<B>: BufferAlloc,
{
    if let Some(max_len) = opts.max_len().filter(|&max_len| expected > max_len) {
        trace!(max_len, "declared length over limit");
        return Err(DotError::Allocation { len: expected });
    }

    let mut buffer: Buffer<T> = module.buffer_alloc(expected)?;
    let slots: &mut [T] = buffer.as_mut_slice();

    let mut filled: usize = 0;
    let mut cursor: H::Term = list;
    loop {
        match env.list_cell(cursor) {
            Some((head, tail)) => {
                if filled == expected {
                    return Err(ConversionError::Overrun { expected }.into());
                }
                slots[filled] = T::from_term(env, head, opts.coercion()).map_err(|err| err.at(filled, T::NAME))?;
                filled += 1;
                cursor = tail;
            }
            None if env.is_empty_list(cursor) => break,
            None => return Err(ConversionError::ImproperList { position: filled }.into()),
        }
    }

    if filled != expected {
        return Err(ConversionError::Truncated { expected, got: filled }.into());
    }

    trace!(filled, "list converted");
    Ok(buffer)
}

pub fn list_to_i32_buffer<H, B>(
    env: &H,
    module: &Module<B>,
    list: H::Term,
    expected: usize,
    opts: &ConvertOptions,
) -> Result<Buffer<i32>, DotError>
where
    H: HostEnv,
    B: Backend,
    Module<B>: BufferAlloc,
{
    list_to_buffer(env, module, list, expected, opts)
}

pub fn list_to_i64_buffer<H, B>(
    env: &H,
    module: &Module<B>,
    list: H::Term,
    expected: usize,
    opts: &ConvertOptions,
) -> Result<Buffer<i64>, DotError>
where
    H: HostEnv,
    B: Backend,
    Module<B>: BufferAlloc,
{
    list_to_buffer(env, module, list, expected, opts)
}

pub fn list_to_f64_buffer<H, B>(
    env: &H,
    module: &Module<B>,
    list: H::Term,
    expected: usize,
    opts: &ConvertOptions,
) -> Result<Buffer<f64>, DotError>
where
    H: HostEnv,
    B: Backend,
    Module<B>: BufferAlloc,
{
    list_to_buffer(env, module, list, expected, opts)
}
