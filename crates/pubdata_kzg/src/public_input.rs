use bls12_381::Scalar;
use sha2::{Digest, Sha256};

use crate::{
    constants::{BYTES_PER_BATCH_AUXILIARY_OUTPUT, BYTES_PER_HASH, MAX_BLOBS_PER_BLOCK},
    Bytes32, Error, PerBlobArtifacts, SerializedScalar, VersionedHash,
};

/// Computes the public input digest `sha256(versioned_hash || x || y)`.
///
/// `x` and `y` are hashed as 32 byte big-endian integers.
pub fn assemble(versioned_hash: &VersionedHash, x: &Scalar, y: &Scalar) -> Bytes32 {
    public_input_digest(versioned_hash, &x.to_bytes_be(), &y.to_bytes_be())
}

pub(crate) fn public_input_digest(
    versioned_hash: &VersionedHash,
    x: &SerializedScalar,
    y: &SerializedScalar,
) -> Bytes32 {
    let mut hasher = Sha256::new();
    hasher.update(versioned_hash);
    hasher.update(x);
    hasher.update(y);
    hasher.finalize().into()
}

/// Per-blob values carried to the batch proof, one slot per blob the
/// transaction may carry.
///
/// Slot `i` belongs to the `i`'th attached blob. Unused slots are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchAuxiliaryOutput {
    pub linear_hashes: [Bytes32; MAX_BLOBS_PER_BLOCK],
    pub public_input_digests: [Bytes32; MAX_BLOBS_PER_BLOCK],
}

impl BatchAuxiliaryOutput {
    /// All linear hashes in slot order, followed by all public input digests in slot order.
    pub fn to_bytes(&self) -> [u8; BYTES_PER_BATCH_AUXILIARY_OUTPUT] {
        let mut bytes = [0u8; BYTES_PER_BATCH_AUXILIARY_OUTPUT];
        let hashes = self
            .linear_hashes
            .iter()
            .chain(&self.public_input_digests);
        for (chunk, hash) in bytes.chunks_exact_mut(BYTES_PER_HASH).zip(hashes) {
            chunk.copy_from_slice(hash);
        }
        bytes
    }
}

/// Packs the artifacts of a batch's blobs in attachment order.
///
/// Fails with [`Error::BlobCountMismatch`] when the number of artifacts differs
/// from the number of attached blobs, or is not between one and
/// [`MAX_BLOBS_PER_BLOCK`].
pub fn assemble_batch(
    items: &[PerBlobArtifacts],
    attached_blobs: usize,
) -> Result<BatchAuxiliaryOutput, Error> {
    if items.len() != attached_blobs || !(1..=MAX_BLOBS_PER_BLOCK).contains(&items.len()) {
        return Err(Error::BlobCountMismatch {
            artifacts: items.len(),
            attached: attached_blobs,
        });
    }

    let mut output = BatchAuxiliaryOutput::default();
    for (slot, item) in items.iter().enumerate() {
        output.linear_hashes[slot] = item.linear_hash;
        output.public_input_digests[slot] = item.public_input_digest;
    }
    Ok(output)
}
