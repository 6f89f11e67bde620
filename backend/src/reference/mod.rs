pub mod buffer;
pub mod dot;
