use criterion::{Criterion, criterion_group, criterion_main};
use exmatrix_backend::{
    CpuRef, CpuUnrolled,
    bench_suite::{bench_dot_product_f64, bench_dot_product_i32},
};

fn bench_dot_product_i32_cpu_ref(c: &mut Criterion) {
    bench_dot_product_i32::<CpuRef>(c, "cpu_ref");
}

fn bench_dot_product_i32_cpu_unrolled(c: &mut Criterion) {
    bench_dot_product_i32::<CpuUnrolled>(c, "cpu_unrolled");
}

fn bench_dot_product_f64_cpu_ref(c: &mut Criterion) {
    bench_dot_product_f64::<CpuRef>(c, "cpu_ref");
}

criterion_group!(
    benches,
    bench_dot_product_i32_cpu_ref,
    bench_dot_product_i32_cpu_unrolled,
    bench_dot_product_f64_cpu_ref,
);
criterion_main!(benches);
