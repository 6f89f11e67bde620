use exmatrix_backend::{CpuRef, CpuUnrolled, reference::dot::dot_i32_ref, test_suite::dot::assert_f64_within_rounding};
use exmatrix_core::{HostEnv, NifTable, Term, TermHeap, TermValue};
use exmatrix_sampling::{distributions::Distributions, source::Source};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn call(table: &NifTable<TermHeap>, env: &mut TermHeap, name: &str, a: Term, b: Term) -> String {
    let res: Term = table.call_encoded(env, name, &[a, b]);
    env.display(res).to_string()
}

#[test]
fn scenarios_through_the_function_table() {
    init_tracing();
    let table: NifTable<TermHeap> = NifTable::exmatrix::<CpuRef>();
    let mut env = TermHeap::new();

    let a: Term = env.list_i64(&[1, 2, 3]);
    let b: Term = env.list_i64(&[4, 5, 6]);
    assert_eq!(call(&table, &mut env, "_dotproduct", a, b), "32");

    let zeros: Term = env.list_i64(&[0, 0, 0]);
    let c: Term = env.list_i64(&[7, 8, 9]);
    assert_eq!(call(&table, &mut env, "_dotproduct", zeros, c), "0");

    let d: Term = env.list_i64(&[-1, 2, -3]);
    let e: Term = env.list_i64(&[4, -5, 6]);
    assert_eq!(call(&table, &mut env, "_dotproduct", d, e), "-32");

    let f: Term = env.list_f64(&[1.5, 2.5]);
    let g: Term = env.list_f64(&[2.0, 4.0]);
    assert_eq!(call(&table, &mut env, "_dotproduct_float", f, g), "13.0");

    let empty: Term = env.list(&[]);
    assert_eq!(call(&table, &mut env, "_dotproduct", empty, empty), "0");
    assert_eq!(call(&table, &mut env, "_dotproduct_float", empty, empty), "0.0");
}

#[test]
fn mismatched_lengths_never_produce_a_number() {
    init_tracing();
    let table: NifTable<TermHeap> = NifTable::exmatrix::<CpuUnrolled>();
    let mut env = TermHeap::new();
    let a: Term = env.list_i64(&[1, 2, 3]);
    let b: Term = env.list_i64(&[4, 5]);
    assert_eq!(
        call(&table, &mut env, "_dotproduct", a, b),
        "{error, {dimension_mismatch, 3, 2}}"
    );
}

#[test]
fn improper_list_is_rejected_before_conversion() {
    init_tracing();
    let table: NifTable<TermHeap> = NifTable::exmatrix::<CpuRef>();
    let mut env = TermHeap::new();
    let one: Term = env.int(1);
    let two: Term = env.int(2);
    let improper: Term = env.improper_list(&[one], two);
    let a: Term = env.list_i64(&[1, 2]);
    assert_eq!(
        call(&table, &mut env, "_dotproduct", a, improper),
        "{error, {not_a_list, 1}}"
    );
}

#[test]
fn random_integer_lists_match_reference() {
    init_tracing();
    let table: NifTable<TermHeap> = NifTable::exmatrix::<CpuUnrolled>();
    let mut source: Source = Source::new([7u8; 32]);

    for _ in 0..32 {
        let len: usize = source.next_len(200);
        let xs: Vec<i32> = (0..len).map(|_| source.next_i32()).collect();
        let ys: Vec<i32> = (0..len).map(|_| source.next_i32()).collect();

        let mut env = TermHeap::new();
        let a: Term = env.list_i64(&xs.iter().map(|&x| x as i64).collect::<Vec<i64>>());
        let b: Term = env.list_i64(&ys.iter().map(|&y| y as i64).collect::<Vec<i64>>());
        let res: Term = table.call(&mut env, "_dotproduct", &[a, b]).unwrap();
        assert_eq!(env.get_i32(res), Some(dot_i32_ref(&xs, &ys)));
    }
}

#[test]
fn random_float_lists_are_within_rounding_of_exact() {
    init_tracing();
    let table: NifTable<TermHeap> = NifTable::exmatrix::<CpuRef>();
    let mut source: Source = Source::new([11u8; 32]);
    let dist: Distributions = Distributions::normal(3.2).unwrap();

    for _ in 0..16 {
        let len: usize = source.next_len(200);
        let mut xs: Vec<f64> = vec![0.0; len];
        let mut ys: Vec<f64> = vec![0.0; len];
        dist.fill_f64(&mut source, &mut xs);
        dist.fill_f64(&mut source, &mut ys);

        let mut env = TermHeap::new();
        let a: Term = env.list_f64(&xs);
        let b: Term = env.list_f64(&ys);
        let res: Term = table.call(&mut env, "_dotproduct_float", &[a, b]).unwrap();
        match env.value(res) {
            Some(TermValue::Float(have)) => assert_f64_within_rounding(*have, &xs, &ys),
            other => panic!("expected a float, got {other:?}"),
        }
    }
}
