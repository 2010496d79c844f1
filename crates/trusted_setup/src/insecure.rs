use bls12_381::{g1_batch_normalize, traits::*, G1Projective, G2Point, G2Projective, Scalar};
use polynomial::domain::Domain;
use serialization::constants::FIELD_ELEMENTS_PER_BLOB;

use crate::TrustedSetup;

impl TrustedSetup {
    /// Builds a setup from a known secret `τ`.
    ///
    /// Anyone who knows `τ` can forge opening proofs. This exists so that tests
    /// and benchmarks run without the ceremony file; never use it in production.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn insecure_from_secret(tau: &Scalar) -> Self {
        let g1 = G1Projective::generator();

        // τ^0, τ^1, ..., τ^(n-1)
        let mut tau_powers = Vec::with_capacity(FIELD_ELEMENTS_PER_BLOB);
        let mut current = Scalar::ONE;
        for _ in 0..FIELD_ELEMENTS_PER_BLOB {
            tau_powers.push(current);
            current *= tau;
        }
        let g1_monomial: Vec<_> = tau_powers.iter().map(|&power| g1 * power).collect();

        // L_i(τ) in natural order, like the ceremony output
        let domain = Domain::new(FIELD_ELEMENTS_PER_BLOB);
        let lagrange_at_tau = domain.lagrange_basis_evaluations(tau);
        let g1_lagrange: Vec<_> = lagrange_at_tau.iter().map(|&basis| g1 * basis).collect();

        Self {
            g1_monomial: g1_batch_normalize(&g1_monomial),
            g1_lagrange: g1_batch_normalize(&g1_lagrange),
            g2_monomial: vec![
                G2Point::generator(),
                (G2Projective::generator() * *tau).into(),
            ],
        }
    }
}
