pub use serialization::constants::*;

/// The maximum number of blobs a single L1 transaction may carry.
pub const MAX_BLOBS_PER_BLOCK: usize = 2;

/// The maximum number of blobs one batch's pubdata may be split into.
///
/// Note: This can never exceed [`MAX_BLOBS_PER_BLOCK`], since all blobs of a
/// batch are attached to the same transaction.
pub const MAX_BLOBS_PER_BATCH: usize = 2;

/// The maximum pubdata size of one batch.
pub const MAX_PUBDATA_BYTES_PER_BATCH: usize = MAX_BLOBS_PER_BATCH * BLOB_CAPACITY_BYTES;

/// The number of bytes in the packed [`crate::BatchAuxiliaryOutput`]:
/// one linear hash and one public input digest per blob slot.
pub const BYTES_PER_BATCH_AUXILIARY_OUTPUT: usize = 2 * MAX_BLOBS_PER_BLOCK * BYTES_PER_HASH;

/// The number of bytes in the input of the point evaluation precompile:
/// `versioned_hash || x || y || commitment || proof`.
pub const BYTES_PER_POINT_EVALUATION_INPUT: usize =
    BYTES_PER_HASH + 2 * BYTES_PER_FIELD_ELEMENT + BYTES_PER_COMMITMENT + BYTES_PER_PROOF;

const _: () = assert!(MAX_BLOBS_PER_BATCH <= MAX_BLOBS_PER_BLOCK);
