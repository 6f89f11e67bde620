//! # exmatrix-backend
//!
//! Numeric buffers and the dot-product reduction behind the exmatrix host
//! extension.
//!
//! ## Architecture
//!
//! The crate follows a four-layer stack:
//!
//! 1. **[`api`]** -- Safe, user-facing traits ([`api::DotProduct`],
//!    [`api::BufferAlloc`]). Callers program against these on a
//!    [`layouts::Module`].
//! 2. **[`oep`]** -- Unsafe extension-point traits mirroring the API
//!    ([`oep::DotProductImpl`], [`oep::BufferAllocImpl`]). Backends implement
//!    these.
//! 3. **[`delegates`]** -- Blanket `impl` glue that connects each [`api`] trait
//!    to the corresponding [`oep`] trait on [`layouts::Module`]. Operand
//!    lengths are validated here so that every backend only ever sees
//!    equal-length slices.
//! 4. **[`mod@reference`]** -- Plain-Rust kernels, used by [`CpuRef`] and as
//!    the correctness oracle for other backends.
//!
//! ## Numeric contract
//!
//! - Integer scalars (`i32`, `i64`) multiply and accumulate with wrapping
//!   two's-complement arithmetic.
//! - Floating-point scalars (`f32`, `f64`) accumulate `acc + a[i] * b[i]`
//!   strictly left to right, without fused multiply-add or compensation.
//! - The dot product of two empty buffers is the additive identity.
//!
//! ## Testing and Benchmarking
//!
//! [`test_suite`] holds backend-generic tests, instantiated through
//! [`backend_test_suite!`] and [`cross_backend_test_suite!`]. [`bench_suite`]
//! holds the Criterion harnesses.

pub mod api;
pub mod bench_suite;
pub mod delegates;
pub mod error;
pub mod layouts;
pub mod oep;
pub mod reference;
pub mod test_suite;

mod implementation;

pub use error::LayoutError;
pub use implementation::{CpuRef, CpuUnrolled};
