//! G1 point benchmarks

use bls12381::{AffinePoint, PointFormat, ProjectivePoint, RandomSource, Scalar};
use criterion::{BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement};
use hex_literal::hex;
use std::hint::black_box;

fn test_scalar_x() -> Scalar {
    Scalar::from_be_bytes(&hex!(
        "3b488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"
    ))
    .unwrap()
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::generator().double();
    let s = test_scalar_x();
    group.bench_function("point-scalar mul", |b| {
        b.iter(|| &black_box(p) * &black_box(s))
    });
}

fn bench_point_mul_by_generator<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::generator();
    let x = test_scalar_x();

    group.bench_function("mul_by_generator naive", |b| {
        b.iter(|| &black_box(p) * &black_box(x))
    });

    group.bench_function("mul_by_generator precomputed", |b| {
        b.iter(|| ProjectivePoint::mul_by_generator(&black_box(x)))
    });
}

fn bench_random_point<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut source = RandomSource::from_seed(&[0x5a; 32]).unwrap();
    group.bench_function("sample and multiply", |b| {
        b.iter(|| {
            let k = source.random_scalar().unwrap();
            ProjectivePoint::mul_by_generator(&k)
        })
    });
}

fn bench_high_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("high-level operations");
    bench_point_mul(&mut group);
    bench_point_mul_by_generator(&mut group);
    bench_random_point(&mut group);
    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let p = ProjectivePoint::mul_by_generator(&test_scalar_x()).to_affine();
    let compressed = p.to_bytes(PointFormat::Compressed);
    let uncompressed = p.to_bytes(PointFormat::Uncompressed);

    let mut group = c.benchmark_group("point encoding");
    group.bench_function("compress", |b| b.iter(|| black_box(p).to_compressed()));
    group.bench_function("decompress", |b| {
        b.iter(|| AffinePoint::from_slice(black_box(compressed.as_bytes())))
    });
    group.bench_function("decode uncompressed", |b| {
        b.iter(|| AffinePoint::from_slice(black_box(uncompressed.as_bytes())))
    });
    group.finish();
}

criterion_group!(benches, bench_high_level, bench_encoding);
criterion_main!(benches);
