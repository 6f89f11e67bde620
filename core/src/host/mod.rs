//! The host runtime as seen from the extension.
//!
//! [`HostEnv`] lists the services the conversion and boundary layers need
//! from the host: list length and traversal, typed scalar getters and scalar
//! boxing for results. [`TermHeap`] is an in-memory implementation used by
//! the tests, the benches and the doc examples.

mod heap;

pub use heap::{Term, TermDisplay, TermHeap, TermValue};

use std::fmt::Debug;

pub trait HostEnv {
    /// Opaque handle to a host value.
    type Term: Copy + Debug;

    /// Number of elements of a proper list, `None` when `term` is not one.
    fn list_length(&self, term: Self::Term) -> Option<usize>;

    /// Splits a non-empty list into head and tail, `None` for anything else.
    fn list_cell(&self, term: Self::Term) -> Option<(Self::Term, Self::Term)>;

    fn is_empty_list(&self, term: Self::Term) -> bool;

    fn is_integer(&self, term: Self::Term) -> bool;

    /// Integer value if it fits in `i32`.
    fn get_i32(&self, term: Self::Term) -> Option<i32>;

    /// Integer value if it fits in `i64`.
    fn get_i64(&self, term: Self::Term) -> Option<i64>;

    /// Float value. Integers are not floats.
    fn get_f64(&self, term: Self::Term) -> Option<f64>;

    fn make_i32(&mut self, value: i32) -> Self::Term;

    fn make_i64(&mut self, value: i64) -> Self::Term;

    fn make_f64(&mut self, value: f64) -> Self::Term;

    fn make_atom(&mut self, name: &str) -> Self::Term;

    fn make_tuple(&mut self, elems: &[Self::Term]) -> Self::Term;
}
