mod cpu_ref;
mod cpu_unrolled;

pub use cpu_ref::CpuRef;
pub use cpu_unrolled::CpuUnrolled;
