use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use exmatrix_sampling::{distributions::Distributions, source::Source};

use crate::{
    api::{DotProduct, ModuleNew},
    layouts::{Backend, Module},
};

const LOG_LENS: [usize; 5] = [6, 8, 10, 12, 14];

pub fn bench_dot_product_i32<B: Backend>(c: &mut Criterion, label: &str)
where
    Module<B>: DotProduct<i32> + ModuleNew<B>,
{
    let group_name: String = format!("dot_product_i32::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<B: Backend>(len: usize) -> impl FnMut()
    where
        Module<B>: DotProduct<i32> + ModuleNew<B>,
    {
        let module: Module<B> = Module::<B>::new();

        let mut source: Source = Source::new([0u8; 32]);
        let dist: Distributions = Distributions::Ternary;

        let mut a: Vec<i32> = vec![0; len];
        let mut b: Vec<i32> = vec![0; len];
        dist.fill_i32(&mut source, &mut a);
        dist.fill_i32(&mut source, &mut b);

        move || {
            black_box(module.dot_product(&a, &b).ok());
        }
    }

    for log_len in LOG_LENS {
        let id: BenchmarkId = BenchmarkId::from_parameter(1 << log_len);
        let mut runner = runner::<B>(1 << log_len);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

pub fn bench_dot_product_f64<B: Backend>(c: &mut Criterion, label: &str)
where
    Module<B>: DotProduct<f64> + ModuleNew<B>,
{
    let group_name: String = format!("dot_product_f64::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<B: Backend>(len: usize) -> impl FnMut()
    where
        Module<B>: DotProduct<f64> + ModuleNew<B>,
    {
        let module: Module<B> = Module::<B>::new();

        let mut source: Source = Source::new([0u8; 32]);

        let mut a: Vec<f64> = vec![0.0; len];
        let mut b: Vec<f64> = vec![0.0; len];
        a.iter_mut().for_each(|x| *x = source.next_f64(-1.0, 1.0));
        b.iter_mut().for_each(|x| *x = source.next_f64(-1.0, 1.0));

        move || {
            black_box(module.dot_product(&a, &b).ok());
        }
    }

    for log_len in LOG_LENS {
        let id: BenchmarkId = BenchmarkId::from_parameter(1 << log_len);
        let mut runner = runner::<B>(1 << log_len);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}
