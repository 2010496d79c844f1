/// Errors that can occur during deserialization of untrusted input from the public API
/// or the trusted setup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The bytes at the given field element index are not a canonical scalar,
    /// i.e. their big-endian value is not below the field modulus.
    #[error("field element {index} is not canonical: 0x{}", hex::encode(.bytes))]
    CouldNotDeserializeScalar {
        /// Position of the field element inside its blob (0 for standalone scalars).
        index: usize,
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// Failed to deserialize a G1 group point from the given bytes.
    #[error("invalid compressed G1 point: 0x{}", hex::encode(.bytes))]
    CouldNotDeserializeG1Point {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// Failed to deserialize a G2 group point from the given bytes.
    #[error("invalid compressed G2 point: 0x{}", hex::encode(.bytes))]
    CouldNotDeserializeG2Point {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// Scalar had an incorrect byte length.
    #[error("scalar has {length} bytes, expected 32")]
    ScalarHasInvalidLength {
        /// Raw bytes with incorrect length.
        bytes: Vec<u8>,
        /// Detected length of the bytes.
        length: usize,
    },
    /// Blob had an incorrect byte length.
    #[error("blob has {length} bytes, expected 131072")]
    BlobHasInvalidLength {
        /// Detected length of the bytes.
        length: usize,
    },
    /// Point had an incorrect byte length.
    #[error("point has {length} bytes, expected {expected}")]
    PointHasInvalidLength {
        /// Detected length of the bytes.
        length: usize,
        /// Length required by the point's group.
        expected: usize,
    },
    /// A hex string was not valid hex.
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
