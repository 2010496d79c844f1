use serialization::{deserialize_bytes_to_scalar, deserialize_compressed_g1};

use crate::{
    commitment::versioned_hash, public_input::public_input_digest, Bytes32, Context, Error,
    KZGCommitment, KZGProof, SerializedScalar, VerifierError, VersionedHash,
};

impl Context {
    /// Verify the KZG proof that the committed polynomial evaluates to `y` at `x`.
    ///
    /// This is the check the point evaluation precompile performs on L1.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_kzg_proof(
        &self,
        commitment: KZGCommitment,
        x: SerializedScalar,
        y: SerializedScalar,
        proof: KZGProof,
    ) -> Result<(), Error> {
        // Deserialize the KZG commitment.
        let commitment = deserialize_compressed_g1(&commitment)?;

        // Deserialize the KZG proof.
        let proof = deserialize_compressed_g1(&proof)?;

        // Deserialize the point and the evaluation into scalars.
        let x = deserialize_bytes_to_scalar(&x)?;
        let y = deserialize_bytes_to_scalar(&y)?;

        // Verify KZG proof.
        self.verifier.verify_kzg_proof(commitment, x, y, proof)?;

        Ok(())
    }

    /// Performs every check the L1 side makes for one blob.
    ///
    /// - `versioned_hash` was obtained from the execution layer and must belong to `commitment`.
    /// - `proof` must open `commitment` to `y` at `x`.
    /// - `sha256(versioned_hash || x || y)` must equal the digest certified by the batch proof.
    pub fn verify_public_input(
        &self,
        versioned_hash_from_l1: VersionedHash,
        commitment: KZGCommitment,
        x: SerializedScalar,
        y: SerializedScalar,
        proof: KZGProof,
        certified_digest: Bytes32,
    ) -> Result<(), Error> {
        if versioned_hash(&commitment) != versioned_hash_from_l1 {
            return Err(VerifierError::VersionedHashMismatch.into());
        }

        self.verify_kzg_proof(commitment, x, y, proof)?;

        if public_input_digest(&versioned_hash_from_l1, &x, &y) != certified_digest {
            return Err(VerifierError::PublicInputDigestMismatch.into());
        }

        Ok(())
    }
}
