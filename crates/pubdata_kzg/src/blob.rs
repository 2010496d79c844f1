use bls12_381::Scalar;
use polynomial::bit_reverse::bitreverse_slice;
use serialization::{deserialize_blob_to_scalars, serialize_scalars_to_blob, SerializationError};

use crate::{constants::FIELD_ELEMENTS_PER_BLOB, BlobRef};

/// The field elements of one blob, in blob order.
///
/// Blob order is the bit-reversal of the natural order of the evaluation
/// domain: element `i` is the polynomial's value at `ω^brp(i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    elements: Vec<Scalar>,
}

impl Blob {
    /// Wraps exactly `FIELD_ELEMENTS_PER_BLOB` elements.
    pub(crate) fn new(elements: Vec<Scalar>) -> Self {
        assert_eq!(elements.len(), FIELD_ELEMENTS_PER_BLOB);
        Self { elements }
    }

    /// Deserializes a blob, rejecting elements that are not canonical.
    pub fn from_bytes(blob: BlobRef) -> Result<Self, SerializationError> {
        deserialize_blob_to_scalars(blob).map(Self::new)
    }

    /// Serializes the blob as 32 byte big-endian field elements.
    pub fn to_bytes(&self) -> Box<[u8; crate::constants::BYTES_PER_BLOB]> {
        serialize_scalars_to_blob(&self.elements)
    }

    pub fn elements(&self) -> &[Scalar] {
        &self.elements
    }

    /// The polynomial's evaluations in the natural order of the domain.
    pub(crate) fn to_polynomial(&self) -> Vec<Scalar> {
        let mut polynomial = self.elements.clone();
        bitreverse_slice(&mut polynomial);
        polynomial
    }
}
