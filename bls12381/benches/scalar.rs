//! BLS12-381 scalar and base field benchmarks

use bls12381::{FieldElement, HashDrbg, RandomSource, Scalar};
use criterion::{BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement};
use hex_literal::hex;
use std::hint::black_box;

fn test_scalar_x() -> Scalar {
    Scalar::from_be_bytes(&hex!(
        "3b488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"
    ))
    .unwrap()
}

fn test_scalar_y() -> Scalar {
    Scalar::from_be_bytes(&hex!(
        "67e2f68071ed8281e8aed6bcf1c5207c5e633722d920afd6ae22d06eeb8035e3"
    ))
    .unwrap()
}

fn bench_scalar_arith<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_scalar_x();
    let y = test_scalar_y();
    group.bench_function("add", |b| b.iter(|| black_box(x) + black_box(y)));
    group.bench_function("mul", |b| b.iter(|| black_box(x) * black_box(y)));
    group.bench_function("negate", |b| b.iter(|| -black_box(x)));
    group.bench_function("invert", |b| b.iter(|| black_box(x).invert()));
}

fn bench_scalar_reduce<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let wide = [0xa7u8; 96];
    group.bench_function("reduce 96 bytes", |b| {
        b.iter(|| Scalar::reduce_be_slice(black_box(&wide)))
    });
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar operations");
    bench_scalar_arith(&mut group);
    bench_scalar_reduce(&mut group);
    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    group.bench_function("seed", |b| b.iter(|| HashDrbg::new(black_box(&[7u8; 32]))));

    let mut source = RandomSource::from_seed(&[7u8; 32]).unwrap();
    group.bench_function("random_scalar", |b| b.iter(|| source.random_scalar()));

    let mut buf = [0u8; 1024];
    group.bench_function("fill 1 KiB", |b| b.iter(|| source.fill_bytes(&mut buf)));

    group.finish();
}

fn bench_field(c: &mut Criterion) {
    let x = FieldElement::from(0x1234_5678_9abc_def0u64).square();
    let mut group = c.benchmark_group("field element operations");
    group.bench_function("mul", |b| b.iter(|| black_box(x) * black_box(x)));
    group.bench_function("sqrt", |b| b.iter(|| black_box(x).sqrt()));
    group.finish();
}

criterion_group!(benches, bench_scalar, bench_sampling, bench_field);
criterion_main!(benches);
