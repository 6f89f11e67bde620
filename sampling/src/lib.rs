//! Deterministic pseudorandom inputs for exmatrix tests and benches.

pub mod distributions;
pub mod source;
