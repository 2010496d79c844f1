pub use kzg_single_open::VerifierError;
pub use serialization::SerializationError;
pub use trusted_setup::SetupError;

/// Errors raised while packing pubdata into blob field elements, or unpacking it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The 32 byte chunk at `element_index` is not below the field modulus.
    #[error("field element {element_index} is not below the scalar field modulus")]
    FieldOverflow { element_index: usize },
    /// More pubdata than fits into the blob or batch.
    #[error("pubdata of {length} bytes exceeds the capacity of {capacity} bytes")]
    DataTooLarge { length: usize, capacity: usize },
    /// Bytes past the pubdata length, or a reserved high byte, are not zero.
    #[error("field element {element_index} carries non-zero padding")]
    NonZeroPadding { element_index: usize },
}

/// Errors raised by the configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration is not valid JSON: {0}")]
    Json(String),
    #[error("trusted setup digest is not 32 bytes of hex: {0}")]
    InvalidSetupDigest(String),
    #[error("max_blobs_per_batch must be between 1 and {max}, got {value}")]
    InvalidMaxBlobsPerBatch { value: usize, max: usize },
}

/// Top-level error type of the pubdata commitment pipeline.
///
/// Every error is deterministic: retrying the same input fails the same way.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error encountered while encoding pubdata into a blob.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// Error encountered while (de)serializing blobs, scalars, or group elements.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
    /// Error encountered during verification of an opening or public input.
    #[error(transparent)]
    Verifier(#[from] VerifierError),
    /// The trusted setup could not be loaded. No context exists without one.
    #[error("invalid trusted setup: {0}")]
    InvalidSetup(#[from] SetupError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The number of per-blob artifacts differs from the number of blobs
    /// attached to the transaction, or exceeds `MAX_BLOBS_PER_BLOCK`.
    #[error("{artifacts} blob artifacts for {attached} attached blobs")]
    BlobCountMismatch { artifacts: usize, attached: usize },
    /// An error raised while processing the blob at `blob_index` of a batch.
    #[error("blob {blob_index}: {source}")]
    InBlob {
        blob_index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attaches the position of the failing blob inside its batch.
    pub(crate) fn in_blob(self, blob_index: usize) -> Self {
        Self::InBlob {
            blob_index,
            source: Box::new(self),
        }
    }

    /// Strips any blob position context and returns the underlying error.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::InBlob { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns true if the error is an opening proof that failed the pairing check.
    pub fn is_proof_invalid(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::Verifier(VerifierError::InvalidProof)
        )
    }
}
