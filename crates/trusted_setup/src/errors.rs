use std::path::PathBuf;

use serialization::SerializationError;

/// Errors raised while loading or validating a trusted setup.
///
/// All of them are fatal: a context is never built from a setup that failed to load.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("could not read trusted setup from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("trusted setup is not valid JSON")]
    Json(#[from] serde_json::Error),
    /// No expected digest was configured, so the file cannot be trusted.
    #[error("no SHA-256 digest configured for the trusted setup file")]
    MissingDigest,
    #[error("trusted setup digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch { expected: String, actual: String },
    #[error("trusted setup field `{field}` has {actual} points, expected {expected}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("trusted setup field `{field}` has an invalid point at index {index}")]
    InvalidPoint {
        field: &'static str,
        index: usize,
        #[source]
        source: SerializationError,
    },
    /// The Lagrange points do not describe the same secret as the monomial points.
    #[error("trusted setup Lagrange points do not sum to the first monomial point")]
    InconsistentLagrangeBasis,
    /// `[τ]G₁` and `[τ]G₂` were produced from different secrets.
    #[error("trusted setup G1 and G2 points are not generated by the same secret")]
    InconsistentG2Points,
}
