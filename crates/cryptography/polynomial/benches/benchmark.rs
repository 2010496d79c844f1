use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bls12_381::{ff::Field, Scalar};
use pubdata_kzg_polynomial::domain::Domain;
use rand::{rngs::StdRng, SeedableRng};

pub fn bench_barycentric_evaluation(c: &mut Criterion) {
    const NUM_ELEMENTS: usize = 4096;
    let mut rng = StdRng::seed_from_u64(0);
    let domain = Domain::new(NUM_ELEMENTS);
    let evaluations: Vec<_> = (0..NUM_ELEMENTS).map(|_| Scalar::random(&mut rng)).collect();
    let z = Scalar::random(&mut rng);

    c.bench_function(&format!("barycentric evaluation size: {NUM_ELEMENTS}"), |b| {
        b.iter(|| domain.evaluate_lagrange_form(black_box(&evaluations), black_box(&z)))
    });
}

criterion_group!(benches, bench_barycentric_evaluation);
criterion_main!(benches);
