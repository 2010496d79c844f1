pub mod constants;
mod errors;
pub mod types;

use bls12_381::{scalar_from_bytes_be_canonical, G1Point, G2Point, Scalar};
pub use errors::Error as SerializationError;

use crate::constants::{
    BYTES_PER_BLOB, BYTES_PER_FIELD_ELEMENT, BYTES_PER_G1_POINT, BYTES_PER_G2_POINT,
};

/// Deserializes a blob into its field elements, keeping the blob's order.
///
/// Every 32 byte chunk must be a canonical field element. The error names the
/// index of the first chunk that is not.
pub fn deserialize_blob_to_scalars(blob_bytes: &[u8]) -> Result<Vec<Scalar>, SerializationError> {
    if blob_bytes.len() != BYTES_PER_BLOB {
        return Err(SerializationError::BlobHasInvalidLength {
            length: blob_bytes.len(),
        });
    }

    blob_bytes
        .chunks_exact(BYTES_PER_FIELD_ELEMENT)
        .enumerate()
        .map(|(index, chunk)| deserialize_scalar_at(index, chunk))
        .collect()
}

/// Deserializes a standalone 32 byte big-endian field element.
pub fn deserialize_bytes_to_scalar(scalar_bytes: &[u8]) -> Result<Scalar, SerializationError> {
    deserialize_scalar_at(0, scalar_bytes)
}

fn deserialize_scalar_at(index: usize, scalar_bytes: &[u8]) -> Result<Scalar, SerializationError> {
    let Ok(bytes32) = <&[u8; BYTES_PER_FIELD_ELEMENT]>::try_from(scalar_bytes) else {
        return Err(SerializationError::ScalarHasInvalidLength {
            length: scalar_bytes.len(),
            bytes: scalar_bytes.to_vec(),
        });
    };

    scalar_from_bytes_be_canonical(bytes32).ok_or_else(|| {
        SerializationError::CouldNotDeserializeScalar {
            index,
            bytes: scalar_bytes.to_vec(),
        }
    })
}

/// Serializes field elements into a blob, 32 big-endian bytes each.
///
/// Panics if the number of scalars does not fill exactly one blob.
pub fn serialize_scalars_to_blob(scalars: &[Scalar]) -> Box<[u8; BYTES_PER_BLOB]> {
    assert_eq!(
        scalars.len() * BYTES_PER_FIELD_ELEMENT,
        BYTES_PER_BLOB,
        "a blob holds exactly FIELD_ELEMENTS_PER_BLOB scalars"
    );

    let mut blob = Box::new([0u8; BYTES_PER_BLOB]);
    for (chunk, scalar) in blob.chunks_exact_mut(BYTES_PER_FIELD_ELEMENT).zip(scalars) {
        chunk.copy_from_slice(&scalar.to_bytes_be());
    }
    blob
}

/// Deserializes a compressed G1 point, checking that it lies in the prime order subgroup.
pub fn deserialize_compressed_g1(point_bytes: &[u8]) -> Result<G1Point, SerializationError> {
    let Ok(point_bytes) = <&[u8; BYTES_PER_G1_POINT]>::try_from(point_bytes) else {
        return Err(SerializationError::PointHasInvalidLength {
            length: point_bytes.len(),
            expected: BYTES_PER_G1_POINT,
        });
    };

    let opt_g1: Option<G1Point> = Option::from(G1Point::from_compressed(point_bytes));
    opt_g1.ok_or_else(|| SerializationError::CouldNotDeserializeG1Point {
        bytes: point_bytes.to_vec(),
    })
}

/// Deserializes a compressed G2 point, checking that it lies in the prime order subgroup.
pub fn deserialize_compressed_g2(point_bytes: &[u8]) -> Result<G2Point, SerializationError> {
    let Ok(point_bytes) = <&[u8; BYTES_PER_G2_POINT]>::try_from(point_bytes) else {
        return Err(SerializationError::PointHasInvalidLength {
            length: point_bytes.len(),
            expected: BYTES_PER_G2_POINT,
        });
    };

    let opt_g2: Option<G2Point> = Option::from(G2Point::from_compressed(point_bytes));
    opt_g2.ok_or_else(|| SerializationError::CouldNotDeserializeG2Point {
        bytes: point_bytes.to_vec(),
    })
}

/// Deserializes a `0x`-prefixed (or bare) hex string holding a compressed G1 point.
pub fn deserialize_hex_g1(hex_str: &str) -> Result<G1Point, SerializationError> {
    let bytes = hex::decode(strip_hex_prefix(hex_str))?;
    deserialize_compressed_g1(&bytes)
}

/// Deserializes a `0x`-prefixed (or bare) hex string holding a compressed G2 point.
pub fn deserialize_hex_g2(hex_str: &str) -> Result<G2Point, SerializationError> {
    let bytes = hex::decode(strip_hex_prefix(hex_str))?;
    deserialize_compressed_g2(&bytes)
}

fn strip_hex_prefix(hex_str: &str) -> &str {
    hex_str.strip_prefix("0x").unwrap_or(hex_str)
}

pub fn serialize_g1_compressed(point: &G1Point) -> [u8; BYTES_PER_G1_POINT] {
    point.to_compressed()
}

pub fn serialize_g2_compressed(point: &G2Point) -> [u8; BYTES_PER_G2_POINT] {
    point.to_compressed()
}
