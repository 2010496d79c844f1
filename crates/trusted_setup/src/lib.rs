mod errors;
#[cfg(any(test, feature = "insecure"))]
mod insecure;

use std::path::Path;

use bls12_381::{multi_pairings, traits::*, G1Point, G1Projective, G2Point, G2Prepared};
pub use errors::SetupError;
use serde::{Deserialize, Serialize};
use serialization::{
    constants::{BYTES_PER_HASH, FIELD_ELEMENTS_PER_BLOB},
    deserialize_hex_g1, deserialize_hex_g2, serialize_g1_compressed, serialize_g2_compressed,
    SerializationError,
};
use sha2::{Digest, Sha256};

/// The verifier needs `G₂` and `[τ]G₂`.
pub const MIN_G2_POINTS: usize = 2;

/// Parsed and validated trusted setup for blobs of `FIELD_ELEMENTS_PER_BLOB` elements.
///
/// Values of this type are only produced by the loaders below, which reject
/// setups of the wrong size, points outside the prime order subgroup and
/// setups whose G1 and G2 halves disagree. Once built it is never mutated.
///
/// ```compile_fail
/// use pubdata_kzg_trusted_setup::TrustedSetup;
///
/// let setup = TrustedSetup {
///     g1_monomial: vec![],
///     g1_lagrange: vec![],
///     g2_monomial: vec![],
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedSetup {
    g1_monomial: Vec<G1Point>,
    g1_lagrange: Vec<G1Point>,
    g2_monomial: Vec<G2Point>,
}

/// On-disk representation: `0x`-prefixed hex strings of compressed points.
#[derive(Serialize, Deserialize)]
struct SerializedTrustedSetup {
    g1_monomial: Vec<String>,
    g1_lagrange: Vec<String>,
    g2_monomial: Vec<String>,
}

/// SHA-256 of the given bytes.
pub fn sha256_digest(bytes: &[u8]) -> [u8; BYTES_PER_HASH] {
    Sha256::digest(bytes).into()
}

impl TrustedSetup {
    /// `[τ^i]G₁` for `i` in `0..FIELD_ELEMENTS_PER_BLOB`.
    pub fn g1_monomial(&self) -> &[G1Point] {
        &self.g1_monomial
    }

    /// `[L_i(τ)]G₁` in the natural order of the domain, as published by the ceremony.
    ///
    /// `L_i` is the Lagrange polynomial that is one at `ω^i`.
    pub fn g1_lagrange(&self) -> &[G1Point] {
        &self.g1_lagrange
    }

    /// `[τ^i]G₂`, at least `G₂` and `[τ]G₂`.
    pub fn g2_monomial(&self) -> &[G2Point] {
        &self.g2_monomial
    }

    /// Parses and validates a trusted setup in the Ethereum JSON format.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        Self::from_json_bytes(json.as_bytes())
    }

    /// Parses and validates a trusted setup from raw JSON bytes.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_json_bytes(json: &[u8]) -> Result<Self, SetupError> {
        let serialized: SerializedTrustedSetup = serde_json::from_slice(json)?;

        check_length("g1_monomial", serialized.g1_monomial.len(), FIELD_ELEMENTS_PER_BLOB)?;
        check_length("g1_lagrange", serialized.g1_lagrange.len(), FIELD_ELEMENTS_PER_BLOB)?;
        if serialized.g2_monomial.len() < MIN_G2_POINTS {
            return Err(SetupError::InvalidLength {
                field: "g2_monomial",
                expected: MIN_G2_POINTS,
                actual: serialized.g2_monomial.len(),
            });
        }

        let setup = Self {
            g1_monomial: decode_points("g1_monomial", &serialized.g1_monomial, deserialize_hex_g1)?,
            g1_lagrange: decode_points("g1_lagrange", &serialized.g1_lagrange, deserialize_hex_g1)?,
            g2_monomial: decode_points("g2_monomial", &serialized.g2_monomial, deserialize_hex_g2)?,
        };
        setup.check_consistency()?;

        Ok(setup)
    }

    /// Reads a trusted setup from `path`.
    ///
    /// The file's SHA-256 digest must equal `expected_sha256`; it is compared
    /// before anything is parsed. The structural checks alone accept any setup
    /// built from a secret someone may know.
    pub fn from_file(
        path: impl AsRef<Path>,
        expected_sha256: &[u8; BYTES_PER_HASH],
    ) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read trusted setup");

        let actual = sha256_digest(&bytes);
        if actual != *expected_sha256 {
            #[cfg(feature = "tracing")]
            tracing::error!(path = %path.display(), "trusted setup digest mismatch");

            return Err(SetupError::DigestMismatch {
                expected: hex::encode(expected_sha256),
                actual: hex::encode(actual),
            });
        }

        Self::from_json_bytes(&bytes)
    }

    /// Serializes the setup back into the Ethereum JSON format.
    pub fn to_json(&self) -> Result<String, SetupError> {
        let to_hex = |bytes: &[u8]| format!("0x{}", hex::encode(bytes));
        let serialized = SerializedTrustedSetup {
            g1_monomial: self
                .g1_monomial
                .iter()
                .map(|point| to_hex(&serialize_g1_compressed(point)))
                .collect(),
            g1_lagrange: self
                .g1_lagrange
                .iter()
                .map(|point| to_hex(&serialize_g1_compressed(point)))
                .collect(),
            g2_monomial: self
                .g2_monomial
                .iter()
                .map(|point| to_hex(&serialize_g2_compressed(point)))
                .collect(),
        };
        Ok(serde_json::to_string(&serialized)?)
    }

    /// Checks that all points were generated by a single secret `τ`.
    ///
    /// - `Σ [L_i(τ)]G₁ = [1]G₁ = g1_monomial[0]` since the Lagrange basis sums to one.
    /// - `e([τ]G₁, G₂) = e(G₁, [τ]G₂)`.
    fn check_consistency(&self) -> Result<(), SetupError> {
        let lagrange_sum: G1Projective = self
            .g1_lagrange
            .iter()
            .map(|point| G1Projective::from(*point))
            .sum();
        if G1Point::from(lagrange_sum) != self.g1_monomial[0] {
            return Err(SetupError::InconsistentLagrangeBasis);
        }

        let neg_g1 = -self.g1_monomial[0];
        let g2_prepared = G2Prepared::from(self.g2_monomial[0]);
        let tau_g2_prepared = G2Prepared::from(self.g2_monomial[1]);
        if !multi_pairings(&[
            (&self.g1_monomial[1], &g2_prepared),
            (&neg_g1, &tau_g2_prepared),
        ]) {
            return Err(SetupError::InconsistentG2Points);
        }

        Ok(())
    }
}

fn check_length(field: &'static str, actual: usize, expected: usize) -> Result<(), SetupError> {
    if actual != expected {
        return Err(SetupError::InvalidLength {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn decode_points<T>(
    field: &'static str,
    hex_points: &[String],
    decode: fn(&str) -> Result<T, SerializationError>,
) -> Result<Vec<T>, SetupError> {
    hex_points
        .iter()
        .enumerate()
        .map(|(index, hex_point)| {
            decode(hex_point).map_err(|source| SetupError::InvalidPoint {
                field,
                index,
                source,
            })
        })
        .collect()
}
