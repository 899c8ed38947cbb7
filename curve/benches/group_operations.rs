use babyjub::{mul_base8, to_bits_le, CurvePoint, Fr, RandomField, Unchecked};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_add(c: &mut Criterion) {
    let g = CurvePoint::base8();
    let h = CurvePoint::generator();
    c.bench_function("point_add", |bencher| {
        bencher.iter(|| black_box(black_box(g).add(black_box(&h))))
    });
}

fn bench_double(c: &mut Criterion) {
    let g = CurvePoint::base8();
    c.bench_function("point_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_validate(c: &mut Criterion) {
    let g = CurvePoint::<Unchecked>::from(CurvePoint::base8());
    c.bench_function("point_validate", |bencher| {
        bencher.iter(|| black_box(black_box(g).validate()))
    });
}

fn bench_mul_base8(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut bits = to_bits_le::<{ Fr::NUM_BITS }>(&Fr::random(&mut rng)).expect("bits");
    bits[253] = false;
    let bits = &bits[..253];

    c.bench_function("mul_base8", |bencher| {
        bencher.iter(|| black_box(mul_base8(black_box(bits))))
    });
}

criterion_group!(benches, bench_add, bench_double, bench_validate, bench_mul_base8);
criterion_main!(benches);
