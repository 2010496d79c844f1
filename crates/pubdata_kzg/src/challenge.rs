use bls12_381::{reduce_bytes_to_scalar_bias, Scalar};
use sha2::{Digest, Sha256};

use crate::{Blob, Bytes32, Context, KZGProof, VersionedHash};

/// `sha256(raw)`, the hash that binds a blob's artifacts to its pubdata.
pub fn linear_hash(raw: &[u8]) -> Bytes32 {
    Sha256::digest(raw).into()
}

/// Derives the evaluation point `x` for a blob from its pubdata and versioned hash.
///
/// `x = sha256(sha256(raw) || versioned_hash) mod r`.
///
/// The verifier never recomputes `x`. It is trusted because the batch proof
/// certifies the linear hash and the public input digest that `x` feeds into,
/// so `x` is fixed before anyone could choose it after seeing the commitment.
pub fn derive_challenge(raw: &[u8], versioned_hash: &VersionedHash) -> Scalar {
    derive_challenge_from_linear_hash(&linear_hash(raw), versioned_hash)
}

/// Same as [`derive_challenge`] for callers that already hold `sha256(raw)`.
pub fn derive_challenge_from_linear_hash(
    linear_hash: &Bytes32,
    versioned_hash: &VersionedHash,
) -> Scalar {
    let mut hasher = Sha256::new();
    hasher.update(linear_hash);
    hasher.update(versioned_hash);
    let digest: [u8; 32] = hasher.finalize().into();

    // The bias of reducing a 256 bit digest modulo the 255 bit r is negligible
    // for a challenge.
    reduce_bytes_to_scalar_bias(digest)
}

impl Context {
    /// Evaluates the blob's polynomial at `x` and proves the evaluation.
    ///
    /// Returns `y = p(x)` and the compressed opening proof. When `x` is a point
    /// of the domain, `y` is read from the blob directly.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn evaluate(&self, blob: &Blob, x: Scalar) -> (Scalar, KZGProof) {
        let polynomial = blob.to_polynomial();

        let (proof, y) = self.prover.compute_kzg_proof(&polynomial, x);

        (y, proof.to_compressed())
    }
}
