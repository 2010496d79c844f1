use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pubdata_kzg_bls12_381::{
    batch_inversion::batch_inverse, g1_batch_normalize, lincomb::g1_lincomb, traits::*,
    G1Projective, Scalar,
};
use rand::{rngs::StdRng, SeedableRng};

const NUM_ELEMENTS: usize = 4096;

pub fn bench_batch_inversion(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let elements: Vec<_> = (0..NUM_ELEMENTS).map(|_| Scalar::random(&mut rng)).collect();

    c.bench_function(&format!("batch_inversion size: {NUM_ELEMENTS}"), |b| {
        b.iter(|| {
            let mut elements = black_box(elements.clone());
            batch_inverse(&mut elements);
        })
    });
}

pub fn bench_g1_lincomb(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let points: Vec<_> = (0..NUM_ELEMENTS)
        .map(|_| G1Projective::random(&mut rng))
        .collect();
    let points = g1_batch_normalize(&points);
    let scalars: Vec<_> = (0..NUM_ELEMENTS).map(|_| Scalar::random(&mut rng)).collect();

    c.bench_function(&format!("g1_lincomb size: {NUM_ELEMENTS}"), |b| {
        b.iter(|| g1_lincomb(black_box(&points), black_box(&scalars)))
    });
}

criterion_group!(benches, bench_batch_inversion, bench_g1_lincomb);
criterion_main!(benches);
