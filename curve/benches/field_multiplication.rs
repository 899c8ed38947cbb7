use babyjub::{Fr, RandomField};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_fr_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Fr::random(&mut rng);
    let b = Fr::random(&mut rng);
    c.bench_function("fr_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_fr_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Fr::random(&mut rng);
    c.bench_function("fr_inverse", |bencher| {
        bencher.iter(|| black_box(black_box(a).inverse()))
    });
}

criterion_group!(benches, bench_fr_mul, bench_fr_inverse);
criterion_main!(benches);
