// Note: Any mention of field elements in this file and in general in the codebase
// refers to the scalar field.

/// The number of bytes needed to represent a field element.
///
/// Note: This is originally specified in the eip-4844 specs.
///
/// See: https://github.com/ethereum/EIPs/blob/master/EIPS/eip-4844.md
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// The number of pubdata bytes a field element can carry when its most
/// significant byte is reserved, which keeps it below the field modulus.
pub const USABLE_BYTES_PER_FIELD_ELEMENT: usize = BYTES_PER_FIELD_ELEMENT - 1;

/// The number of field elements needed to represent a blob.
///
/// Note: This is originally specified in the eip-4844 specs.
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

/// The number of bytes needed to represent a blob.
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

/// The maximum number of pubdata bytes accepted for a single blob.
pub const BLOB_CAPACITY_BYTES: usize = FIELD_ELEMENTS_PER_BLOB * USABLE_BYTES_PER_FIELD_ELEMENT;

/// The number of bytes needed to represent a compressed G1 element.
pub const BYTES_PER_G1_POINT: usize = 48;

/// The number of bytes needed to represent a compressed G2 element.
pub const BYTES_PER_G2_POINT: usize = 96;

/// The number of bytes needed to represent a commitment.
///
/// Note: commitments are G1 elements.
pub const BYTES_PER_COMMITMENT: usize = BYTES_PER_G1_POINT;

/// The number of bytes needed to represent an opening proof.
///
/// Note: proofs are G1 elements.
pub const BYTES_PER_PROOF: usize = BYTES_PER_G1_POINT;

/// The number of bytes in a SHA-256 digest, and therefore in every hash
/// produced by the pipeline (versioned hash, linear hash, public input digest).
pub const BYTES_PER_HASH: usize = 32;

/// The leading byte of a versioned hash for KZG commitments.
///
/// Note: This is originally specified in the eip-4844 specs as `VERSIONED_HASH_VERSION_KZG`.
pub const VERSIONED_HASH_VERSION_KZG: u8 = 0x01;
