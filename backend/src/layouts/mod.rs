mod buffer;
mod module;
mod scalar;

pub use buffer::*;
pub use module::*;
pub use scalar::*;
