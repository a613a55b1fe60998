use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{double_scalar_mul, random_scalar, BigUint, CurveParams, Group, Jacobian};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_point(curve: &CurveParams, rng: &mut StdRng) -> Jacobian {
    curve.mul_generator(&random_scalar(rng, &curve.n))
}

fn bench_jacobian_double(c: &mut Criterion) {
    let curve = CurveParams::secp256r1();
    let g = curve.generator_jacobian();
    c.bench_function("jacobian_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double(&curve)))
    });
}

fn bench_jacobian_add(c: &mut Criterion) {
    let curve = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(42);
    let g = random_point(&curve, &mut rng);
    let h = random_point(&curve, &mut rng);
    c.bench_function("jacobian_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g).add(black_box(&h), &curve)))
    });
}

fn bench_to_affine(c: &mut Criterion) {
    let curve = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(42);
    let g = random_point(&curve, &mut rng);
    c.bench_function("jacobian_to_affine", |bencher| {
        bencher.iter(|| black_box(black_box(&g).to_affine(&curve)))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let curve = CurveParams::secp256r1();
    let g = curve.generator_jacobian();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng, &curve.n);

    c.bench_function("double_and_add_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&g).scalar_mul(black_box(&scalar), &curve)))
    });
}

fn bench_scalar_mul_windowed(c: &mut Criterion) {
    let curve = CurveParams::secp256r1();
    let g = curve.generator_jacobian();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng, &curve.n);

    c.bench_function("windowed_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&g).mul(black_box(&scalar), &curve)))
    });
}

fn bench_shamir(c: &mut Criterion) {
    let curve = CurveParams::secp256r1();
    let mut rng = StdRng::seed_from_u64(12345);
    let g = curve.generator_jacobian();
    let p = random_point(&curve, &mut rng);
    let u1: BigUint = random_scalar(&mut rng, &curve.n);
    let u2: BigUint = random_scalar(&mut rng, &curve.n);

    c.bench_function("shamir_double_scalar_mul", |bencher| {
        bencher.iter(|| {
            black_box(double_scalar_mul(
                black_box(&g),
                black_box(&u1),
                black_box(&p),
                black_box(&u2),
                &curve,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_jacobian_double,
    bench_jacobian_add,
    bench_to_affine,
    bench_scalar_mul,
    bench_scalar_mul_windowed,
    bench_shamir
);
criterion_main!(benches);
