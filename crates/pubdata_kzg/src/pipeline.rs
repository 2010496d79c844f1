use maybe_rayon::prelude::*;

use crate::{
    challenge::{derive_challenge_from_linear_hash, linear_hash},
    commitment::versioned_hash,
    constants::{BLOB_CAPACITY_BYTES, BYTES_PER_POINT_EVALUATION_INPUT},
    encoder::{encode_with, split_batch_with_limit},
    public_input::{assemble, assemble_batch, BatchAuxiliaryOutput},
    Bytes32, Context, EncodingError, Error, KZGCommitment, KZGProof, SerializedScalar,
    VersionedHash,
};

/// Everything the pipeline produces for a single blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerBlobArtifacts {
    /// `sha256` of the blob's raw pubdata.
    pub linear_hash: Bytes32,
    pub commitment: KZGCommitment,
    pub versioned_hash: VersionedHash,
    /// Evaluation point, big-endian.
    pub x: SerializedScalar,
    /// Evaluation of the blob's polynomial at `x`, big-endian.
    pub y: SerializedScalar,
    pub proof: KZGProof,
    pub public_input_digest: Bytes32,
}

impl PerBlobArtifacts {
    /// Input of the point evaluation precompile:
    /// `versioned_hash || x || y || commitment || proof`.
    pub fn point_evaluation_input(&self) -> [u8; BYTES_PER_POINT_EVALUATION_INPUT] {
        let mut input = [0u8; BYTES_PER_POINT_EVALUATION_INPUT];
        let parts: [&[u8]; 5] = [
            &self.versioned_hash,
            &self.x,
            &self.y,
            &self.commitment,
            &self.proof,
        ];

        let mut offset = 0;
        for part in parts {
            input[offset..offset + part.len()].copy_from_slice(part);
            offset += part.len();
        }
        input
    }
}

impl Context {
    /// Runs the whole pipeline for the pubdata of one blob.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = raw.len())))]
    pub fn process_blob(&self, raw: &[u8]) -> Result<PerBlobArtifacts, Error> {
        let blob = encode_with(raw, self.encoding)?;

        let commitment = self.commit(&blob);
        let versioned_hash = versioned_hash(&commitment);

        let linear_hash = linear_hash(raw);
        let x = derive_challenge_from_linear_hash(&linear_hash, &versioned_hash);

        let (y, proof) = self.evaluate(&blob, x);

        Ok(PerBlobArtifacts {
            linear_hash,
            commitment,
            versioned_hash,
            x: x.to_bytes_be(),
            y: y.to_bytes_be(),
            proof,
            public_input_digest: assemble(&versioned_hash, &x, &y),
        })
    }

    /// Runs the pipeline for every blob of a batch, in parallel when the
    /// `multithreaded` feature is enabled.
    ///
    /// Artifacts are returned in the order of `blobs`. If any blob fails, the
    /// error of the lowest failing index is returned and nothing else.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(blobs = blobs.len())))]
    pub fn process_batch(&self, blobs: &[&[u8]]) -> Result<Vec<PerBlobArtifacts>, Error> {
        if blobs.len() > self.max_blobs_per_batch {
            return Err(EncodingError::DataTooLarge {
                length: blobs.iter().map(|raw| raw.len()).sum(),
                capacity: self.max_blobs_per_batch * BLOB_CAPACITY_BYTES,
            }
            .into());
        }

        let results: Vec<_> = blobs
            .maybe_par_iter()
            .enumerate()
            .map(|(blob_index, raw)| {
                self.process_blob(raw)
                    .map_err(|err| err.in_blob(blob_index))
            })
            .collect();

        results.into_iter().collect()
    }

    /// Splits a batch's pubdata into blobs, runs the pipeline on each and packs
    /// the batch auxiliary output.
    pub fn process_pubdata(
        &self,
        pubdata: &[u8],
    ) -> Result<(Vec<PerBlobArtifacts>, BatchAuxiliaryOutput), Error> {
        let blobs = split_batch_with_limit(pubdata, self.max_blobs_per_batch)?;

        let artifacts = self.process_batch(&blobs)?;
        let output = assemble_batch(&artifacts, artifacts.len())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(blobs = artifacts.len(), "assembled batch auxiliary output");

        Ok((artifacts, output))
    }
}
