//! # exmatrix-core
//!
//! Host-facing half of the exmatrix native extension: turns host lists into
//! [`Buffer`](exmatrix_backend::layouts::Buffer)s and runs the dot product
//! over them.
//!
//! | Module       | Role                                                        |
//! |--------------|-------------------------------------------------------------|
//! | [`host`]     | [`HostEnv`] trait for the host runtime, [`TermHeap`] model  |
//! | [`convert`]  | list → buffer conversion, exactly the declared length       |
//! | [`boundary`] | per-call orchestration: lengths, conversion, reduction      |
//! | [`registry`] | `(name, arity)` function table and `{error, Reason}` terms  |
//! | [`config`]   | [`ConvertOptions`] and its builder                          |
//!
//! A typical call from the host goes through [`NifTable::call_encoded`]:
//!
//! ```
//! use exmatrix_backend::CpuRef;
//! use exmatrix_core::{NifTable, TermHeap, TermValue};
//!
//! let table: NifTable<TermHeap> = NifTable::exmatrix::<CpuRef>();
//! let mut env = TermHeap::new();
//! let a = env.list_i64(&[1, 2, 3]);
//! let b = env.list_i64(&[4, 5, 6]);
//! let res = table.call_encoded(&mut env, "_dotproduct", &[a, b]);
//! assert_eq!(env.value(res), Some(&TermValue::Int(32)));
//! ```

pub mod boundary;
pub mod config;
pub mod convert;
pub mod error;
pub mod host;
pub mod registry;

pub use boundary::{dot_product, dot_product_f64, dot_product_i32, dot_product_i64};
pub use config::{BuildError, Coercion, ConvertOptions, ConvertOptionsBuilder};
pub use convert::{FromTerm, IntoTerm, list_to_buffer, list_to_f64_buffer, list_to_i32_buffer, list_to_i64_buffer};
pub use error::{ConversionError, DotError};
pub use host::{HostEnv, Term, TermHeap, TermValue};
pub use registry::{MODULE_NAME, NifFunc, NifHandler, NifTable};
