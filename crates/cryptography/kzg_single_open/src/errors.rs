/// Errors that can occur when verifying a KZG opening proof or the public
/// input built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerifierError {
    /// The pairing check failed: the proof does not open the commitment to the claimed value.
    #[error("kzg opening proof is invalid")]
    InvalidProof,
    /// The versioned hash supplied by the execution layer does not belong to the commitment.
    #[error("versioned hash does not match the commitment")]
    VersionedHashMismatch,
    /// The recomputed public input digest differs from the certified one.
    #[error("public input digest does not match")]
    PublicInputDigestMismatch,
}
