use bls12_381::{multi_pairings, traits::*, G1Point, G2Point, G2Prepared, Scalar};

use crate::VerifierError;

/// The key that is used to verify KZG single-point opening proofs.
#[derive(Debug)]
pub struct VerificationKey {
    pub gen_g1: G1Point,
    pub gen_g2: G2Point,
    pub tau_g2: G2Point,
    // Precomputed G2Prepared values for efficiency
    pub gen_g2_prepared: G2Prepared,
    pub tau_g2_prepared: G2Prepared,
}

impl VerificationKey {
    pub fn new(gen_g1: G1Point, gen_g2: G2Point, tau_g2: G2Point) -> Self {
        Self {
            gen_g1,
            gen_g2,
            tau_g2,
            gen_g2_prepared: G2Prepared::from(gen_g2),
            tau_g2_prepared: G2Prepared::from(tau_g2),
        }
    }
}

#[derive(Debug)]
pub struct Verifier {
    /// Verification key used to verify KZG single-point opening proofs.
    pub verification_key: VerificationKey,
}

impl Verifier {
    pub const fn new(verification_key: VerificationKey) -> Self {
        Self { verification_key }
    }

    /// Checks that `proof` opens `commitment` to `y` at `z`.
    ///
    /// This is the check performed by the EIP-4844 point-evaluation precompile:
    ///
    /// ```text
    /// e(C - [y]G₁ + z·π, G₂) · e(-π, [τ]G₂) == 1
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_kzg_proof(
        &self,
        commitment: G1Point,
        z: Scalar,
        y: Scalar,
        proof: G1Point,
    ) -> Result<(), VerifierError> {
        let vk = &self.verification_key;

        // [f(τ) - y + z*q(τ)]G₁
        let lhs_g1 = (commitment - (vk.gen_g1 * y - proof * z)).to_affine();

        // [-q(τ)]G₁
        let rhs_g1 = -proof;

        multi_pairings(&[(&lhs_g1, &vk.gen_g2_prepared), (&rhs_g1, &vk.tau_g2_prepared)])
            .then_some(())
            .ok_or(VerifierError::InvalidProof)
    }
}

#[cfg(test)]
mod tests {
    use bls12_381::{traits::*, Scalar};
    use polynomial::domain::Domain;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{prover::Prover, test_utils::insecure_keys};

    fn setup(size: usize) -> (Prover, Verifier) {
        let domain = Domain::new(size);
        let (commit_key, verification_key) = insecure_keys(&domain, Scalar::from(1_337u64));
        (
            Prover::new(size, commit_key),
            Verifier::new(verification_key),
        )
    }

    #[test]
    fn valid_proof_verifies() {
        let (prover, verifier) = setup(16);
        let mut rng = StdRng::seed_from_u64(3);
        let polynomial: Vec<_> = (0..16).map(|_| Scalar::random(&mut rng)).collect();

        let commitment = prover.commit(&polynomial);

        for z in [Scalar::random(&mut rng), prover.domain.roots[3]] {
            let (proof, y) = prover.compute_kzg_proof(&polynomial, z);
            assert_eq!(verifier.verify_kzg_proof(commitment, z, y, proof), Ok(()));
        }
    }

    #[test]
    fn tampered_evaluation_is_rejected() {
        let (prover, verifier) = setup(16);
        let polynomial: Vec<_> = (0..16u64).map(Scalar::from).collect();
        let commitment = prover.commit(&polynomial);
        let z = Scalar::from(42u64);

        let (proof, y) = prover.compute_kzg_proof(&polynomial, z);

        assert_eq!(
            verifier.verify_kzg_proof(commitment, z, y + Scalar::ONE, proof),
            Err(VerifierError::InvalidProof)
        );
        assert_eq!(
            verifier.verify_kzg_proof(commitment, z + Scalar::ONE, y, proof),
            Err(VerifierError::InvalidProof)
        );
    }
}
