mod buffer;
mod dot;
mod module;

pub use buffer::*;
pub use dot::*;
pub use module::*;
