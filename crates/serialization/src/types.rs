use crate::constants::{
    BYTES_PER_BLOB, BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT, BYTES_PER_HASH, BYTES_PER_PROOF,
};

/// `BlobRef` denotes a reference to a serialized blob: 4096 big-endian field elements.
pub type BlobRef<'a> = &'a [u8; BYTES_PER_BLOB];

/// `KZGCommitment` denotes a 48 byte compressed G1 point committing to the
/// polynomial of a blob.
pub type KZGCommitment = [u8; BYTES_PER_COMMITMENT];

/// `KZGProof` denotes a 48 byte compressed G1 point proving that the committed
/// polynomial evaluates to a claimed value at a claimed point.
pub type KZGProof = [u8; BYTES_PER_PROOF];

/// `SerializedScalar` denotes a 32 byte big-endian field element.
pub type SerializedScalar = [u8; BYTES_PER_FIELD_ELEMENT];

/// `VersionedHash` is `version || sha256(commitment)[1..]`.
pub type VersionedHash = [u8; BYTES_PER_HASH];

/// `Bytes32` denotes any 32 byte digest, for example the linear hash of pubdata.
pub type Bytes32 = [u8; BYTES_PER_HASH];
