//! Packs raw pubdata bytes into the field elements of a blob and back.
//!
//! Two packings are supported:
//!
//! - [`FieldEncoding::Canonical32`] reads the data as consecutive 32 byte
//!   big-endian integers. A chunk that is not below the scalar field modulus
//!   is rejected with [`EncodingError::FieldOverflow`]; it is never reduced.
//! - [`FieldEncoding::Safe31`] places 31 data bytes behind a zero high byte, so
//!   every chunk is below the modulus by construction.
//!
//! In both cases the last chunk is padded with zero bytes on the right, and the
//! blob is filled up with zero elements. Either way a blob accepts at most
//! [`BLOB_CAPACITY_BYTES`] of pubdata.

use bls12_381::{scalar_from_bytes_be_canonical, traits::*, Scalar};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        BLOB_CAPACITY_BYTES, BYTES_PER_FIELD_ELEMENT, FIELD_ELEMENTS_PER_BLOB,
        MAX_BLOBS_PER_BATCH, USABLE_BYTES_PER_FIELD_ELEMENT,
    },
    Blob, EncodingError,
};

/// How pubdata bytes are laid out inside a field element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldEncoding {
    /// 32 data bytes per element, each chunk checked against the modulus.
    #[default]
    Canonical32,
    /// 31 data bytes per element behind a zero high byte.
    Safe31,
}

impl FieldEncoding {
    /// Number of pubdata bytes carried by one field element.
    pub const fn data_bytes_per_element(self) -> usize {
        match self {
            Self::Canonical32 => BYTES_PER_FIELD_ELEMENT,
            Self::Safe31 => USABLE_BYTES_PER_FIELD_ELEMENT,
        }
    }

    /// Number of leading bytes of every serialized element that must be zero.
    const fn reserved_bytes_per_element(self) -> usize {
        BYTES_PER_FIELD_ELEMENT - self.data_bytes_per_element()
    }
}

/// Encodes pubdata with the [`FieldEncoding::Canonical32`] packing.
pub fn encode(raw: &[u8]) -> Result<Blob, EncodingError> {
    encode_with(raw, FieldEncoding::Canonical32)
}

/// Encodes pubdata into a blob with the given packing.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = raw.len())))]
pub fn encode_with(raw: &[u8], encoding: FieldEncoding) -> Result<Blob, EncodingError> {
    if raw.len() > BLOB_CAPACITY_BYTES {
        return Err(EncodingError::DataTooLarge {
            length: raw.len(),
            capacity: BLOB_CAPACITY_BYTES,
        });
    }

    let offset = encoding.reserved_bytes_per_element();

    let mut elements = Vec::with_capacity(FIELD_ELEMENTS_PER_BLOB);
    for (element_index, chunk) in raw.chunks(encoding.data_bytes_per_element()).enumerate() {
        let mut bytes = [0u8; BYTES_PER_FIELD_ELEMENT];
        bytes[offset..offset + chunk.len()].copy_from_slice(chunk);

        let element = scalar_from_bytes_be_canonical(&bytes)
            .ok_or(EncodingError::FieldOverflow { element_index })?;
        elements.push(element);
    }
    elements.resize(FIELD_ELEMENTS_PER_BLOB, Scalar::ZERO);

    Ok(Blob::new(elements))
}

/// Recovers the first `length` pubdata bytes of a blob.
///
/// Everything past those bytes, and the reserved high byte of every element
/// under [`FieldEncoding::Safe31`], must be zero.
pub fn decode(blob: &Blob, length: usize, encoding: FieldEncoding) -> Result<Vec<u8>, EncodingError> {
    if length > BLOB_CAPACITY_BYTES {
        return Err(EncodingError::DataTooLarge {
            length,
            capacity: BLOB_CAPACITY_BYTES,
        });
    }

    let offset = encoding.reserved_bytes_per_element();

    let mut data = Vec::with_capacity(length);
    for (element_index, element) in blob.elements().iter().enumerate() {
        let bytes = element.to_bytes_be();
        let (reserved, payload) = bytes.split_at(offset);

        let take = (length - data.len()).min(payload.len());
        data.extend_from_slice(&payload[..take]);

        let is_zero = |bytes: &[u8]| bytes.iter().all(|&byte| byte == 0);
        if !is_zero(reserved) || !is_zero(&payload[take..]) {
            return Err(EncodingError::NonZeroPadding { element_index });
        }
    }

    Ok(data)
}

/// Splits a batch's pubdata into per-blob slices of at most [`BLOB_CAPACITY_BYTES`].
///
/// Empty pubdata still occupies one (empty) blob.
pub fn split_batch(raw: &[u8]) -> Result<Vec<&[u8]>, EncodingError> {
    split_batch_with_limit(raw, MAX_BLOBS_PER_BATCH)
}

/// Same as [`split_batch`] with an explicit limit on the number of blobs.
///
/// A limit of zero blobs rejects every input, including empty pubdata.
pub fn split_batch_with_limit(raw: &[u8], max_blobs: usize) -> Result<Vec<&[u8]>, EncodingError> {
    let capacity = max_blobs * BLOB_CAPACITY_BYTES;
    if max_blobs == 0 || raw.len() > capacity {
        return Err(EncodingError::DataTooLarge {
            length: raw.len(),
            capacity,
        });
    }

    if raw.is_empty() {
        return Ok(vec![raw]);
    }
    Ok(raw.chunks(BLOB_CAPACITY_BYTES).collect())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // BLS12-381 scalar field modulus (r)
    const MODULUS: [u8; 32] = [
        0x73, 0xED, 0xA7, 0x53, 0x29, 0x9D, 0x7D, 0x48, 0x33, 0x39, 0xD8, 0x08, 0x09, 0xA1, 0xD8,
        0x05, 0x53, 0xBD, 0xA4, 0x02, 0xFF, 0xFE, 0x5B, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00,
        0x00, 0x01,
    ];

    fn modulus_minus_one() -> [u8; 32] {
        let mut bytes = MODULUS;
        bytes[31] -= 1;
        bytes
    }

    /// Clears the top bits of every 32 byte chunk so that it is below the modulus.
    fn make_canonical(mut raw: Vec<u8>) -> Vec<u8> {
        for chunk in raw.chunks_mut(BYTES_PER_FIELD_ELEMENT) {
            chunk[0] &= 0x3f;
        }
        raw
    }

    #[test]
    fn empty_input_is_the_zero_blob() {
        let blob = encode(&[]).unwrap();
        assert_eq!(blob.elements().len(), FIELD_ELEMENTS_PER_BLOB);
        assert!(blob.elements().iter().all(|element| bool::from(element.is_zero())));
    }

    #[test]
    fn chunks_are_big_endian_and_right_padded() {
        let mut raw = vec![0u8; 33];
        raw[31] = 1;
        raw[32] = 0x2a;
        let blob = encode(&raw).unwrap();

        assert_eq!(blob.elements()[0], Scalar::ONE);
        // 0x2a followed by 31 zero bytes
        let mut expected = [0u8; 32];
        expected[0] = 0x2a;
        assert_eq!(blob.elements()[1].to_bytes_be(), expected);
        assert_eq!(blob.elements()[2], Scalar::ZERO);
    }

    #[test]
    fn safe31_reserves_the_high_byte() {
        let raw = [0xffu8; 62];
        let blob = encode_with(&raw, FieldEncoding::Safe31).unwrap();

        for element in &blob.elements()[..2] {
            let bytes = element.to_bytes_be();
            assert_eq!(bytes[0], 0);
            assert_eq!(bytes[1..], [0xff; 31]);
        }
        assert!(bool::from(blob.elements()[2].is_zero()));
    }

    #[test]
    fn modulus_boundary() {
        let mut raw = vec![0u8; 64];
        raw[32..].copy_from_slice(&modulus_minus_one());
        let blob = encode(&raw).unwrap();
        assert_eq!(blob.elements()[1], -Scalar::ONE);

        raw[32..].copy_from_slice(&MODULUS);
        assert_eq!(
            encode(&raw),
            Err(EncodingError::FieldOverflow { element_index: 1 })
        );
    }

    #[test]
    fn capacity_boundary() {
        let raw = vec![0u8; BLOB_CAPACITY_BYTES];
        assert!(encode(&raw).is_ok());
        assert!(encode_with(&raw, FieldEncoding::Safe31).is_ok());

        let raw = vec![0u8; BLOB_CAPACITY_BYTES + 1];
        let expected = Err(EncodingError::DataTooLarge {
            length: BLOB_CAPACITY_BYTES + 1,
            capacity: BLOB_CAPACITY_BYTES,
        });
        assert_eq!(encode(&raw), expected);
        assert_eq!(encode_with(&raw, FieldEncoding::Safe31), expected);
    }

    #[test]
    fn decode_rejects_data_past_the_length() {
        let blob = encode(&[1u8; 40]).unwrap();
        assert_eq!(
            decode(&blob, 33, FieldEncoding::Canonical32),
            Err(EncodingError::NonZeroPadding { element_index: 1 })
        );
        assert_eq!(
            decode(&blob, BLOB_CAPACITY_BYTES + 1, FieldEncoding::Canonical32),
            Err(EncodingError::DataTooLarge {
                length: BLOB_CAPACITY_BYTES + 1,
                capacity: BLOB_CAPACITY_BYTES,
            })
        );
    }

    #[test]
    fn decode_rejects_set_high_byte_under_safe31() {
        // A canonical element whose high byte is non-zero cannot come from Safe31.
        let mut raw = vec![0u8; 32];
        raw[0] = 0x01;
        let blob = encode(&raw).unwrap();
        assert_eq!(
            decode(&blob, 0, FieldEncoding::Safe31),
            Err(EncodingError::NonZeroPadding { element_index: 0 })
        );
    }

    #[test]
    fn split_batch_limits() {
        assert_eq!(split_batch(&[]).unwrap(), vec![&[] as &[u8]]);

        let raw = vec![7u8; BLOB_CAPACITY_BYTES + 10];
        let parts = split_batch(&raw).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), BLOB_CAPACITY_BYTES);
        assert_eq!(parts[1].len(), 10);

        let raw = vec![0u8; MAX_BLOBS_PER_BATCH * BLOB_CAPACITY_BYTES + 1];
        assert_eq!(
            split_batch(&raw),
            Err(EncodingError::DataTooLarge {
                length: raw.len(),
                capacity: MAX_BLOBS_PER_BATCH * BLOB_CAPACITY_BYTES,
            })
        );

        assert_eq!(
            split_batch_with_limit(&[], 0),
            Err(EncodingError::DataTooLarge {
                length: 0,
                capacity: 0,
            })
        );
        assert!(split_batch_with_limit(&[1u8; 10], 0).is_err());
    }

    proptest! {
        #[test]
        fn canonical32_roundtrip(raw in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let raw = make_canonical(raw);
            let blob = encode(&raw).unwrap();
            prop_assert_eq!(decode(&blob, raw.len(), FieldEncoding::Canonical32).unwrap(), raw);
        }

        #[test]
        fn safe31_roundtrip(raw in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let blob = encode_with(&raw, FieldEncoding::Safe31).unwrap();
            prop_assert_eq!(decode(&blob, raw.len(), FieldEncoding::Safe31).unwrap(), raw);
        }

        #[test]
        fn encoding_is_deterministic(raw in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(
                encode_with(&raw, FieldEncoding::Safe31),
                encode_with(&raw, FieldEncoding::Safe31)
            );
        }
    }
}
