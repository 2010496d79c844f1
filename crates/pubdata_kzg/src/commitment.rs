use sha2::{Digest, Sha256};

use crate::{
    constants::VERSIONED_HASH_VERSION_KZG, Blob, BlobRef, Context, Error, KZGCommitment,
    VersionedHash,
};

/// Computes `VERSIONED_HASH_VERSION_KZG || sha256(commitment)[1..]`.
pub fn versioned_hash(commitment: &KZGCommitment) -> VersionedHash {
    let mut hash: VersionedHash = Sha256::digest(commitment).into();
    hash[0] = VERSIONED_HASH_VERSION_KZG;
    hash
}

impl Context {
    /// Commits to the polynomial whose evaluations are the blob's elements.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn commit(&self, blob: &Blob) -> KZGCommitment {
        // Bit-reverse polynomial into normal order.
        let polynomial = blob.to_polynomial();

        // Compute commitment in lagrange form.
        self.prover.commit(&polynomial).to_compressed()
    }

    /// Computes the KZG commitment to a serialized blob.
    ///
    /// Every element must already be a canonical field element.
    pub fn blob_to_commitment(&self, blob: BlobRef) -> Result<KZGCommitment, Error> {
        // Deserialize the blob into scalars.
        let blob = Blob::from_bytes(blob)?;

        Ok(self.commit(&blob))
    }
}
