//! Commits rollup pubdata to EIP-4844 blobs.
//!
//! The pipeline per blob is:
//!
//! 1. [`encoder`]: raw pubdata bytes become the 4096 field elements of a [`Blob`].
//! 2. [`commitment`]: the blob is committed to with KZG; the commitment is
//!    hashed into its versioned hash.
//! 3. [`challenge`]: the evaluation point `x` is derived from the pubdata hash
//!    and the versioned hash; the blob's polynomial is evaluated and opened there.
//! 4. [`public_input`]: `(versioned_hash, x, y)` is hashed into the digest the
//!    batch proof certifies, and a batch's digests are packed in blob order.
//!
//! [`Context`] holds the prover and verifier keys derived from the trusted
//! setup. It is immutable after construction and can be shared between
//! threads, typically behind an `Arc`.

mod blob;
pub mod challenge;
pub mod commitment;
mod config;
pub mod constants;
pub mod encoder;
mod errors;
mod pipeline;
pub mod public_input;
mod setup;
mod verifier;

/// Re-exported types
pub use blob::Blob;
pub use config::Config;
pub use encoder::FieldEncoding;
pub use errors::{ConfigError, EncodingError, Error, SerializationError, SetupError, VerifierError};
pub use pipeline::PerBlobArtifacts;
pub use public_input::BatchAuxiliaryOutput;
pub use serialization::types::*;
pub use setup::TrustedSetup;

#[rustfmt::skip]
// Note: adding rustfmt::skip so that `cargo fmt` does not mix the
// public re-exported types with the following private imports.
use kzg_single_open::{prover::Prover, verifier::Verifier};
use constants::{FIELD_ELEMENTS_PER_BLOB, MAX_BLOBS_PER_BATCH, MAX_BLOBS_PER_BLOCK};
use setup::{commit_key_from_setup, verification_key_from_setup};

#[derive(Debug)]
pub struct Context {
    prover: Prover,
    verifier: Verifier,
    encoding: FieldEncoding,
    max_blobs_per_batch: usize,
}

impl Context {
    /// Builds a context with the default packing and blob limit.
    ///
    /// The setup has already been validated when it was loaded, so this cannot fail.
    pub fn new(trusted_setup: &TrustedSetup) -> Self {
        Self {
            prover: Prover::new(FIELD_ELEMENTS_PER_BLOB, commit_key_from_setup(trusted_setup)),
            verifier: Verifier::new(verification_key_from_setup(trusted_setup)),
            encoding: FieldEncoding::default(),
            max_blobs_per_batch: MAX_BLOBS_PER_BATCH,
        }
    }

    /// Loads the trusted setup named by `config` and builds a context from it.
    ///
    /// Fails when the configuration is invalid, when it does not pin the
    /// setup's SHA-256 digest, or when the setup cannot be loaded; in that
    /// case no context exists.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        config.validate()?;

        let expected_digest = config
            .trusted_setup_digest()?
            .ok_or(SetupError::MissingDigest)?;
        let trusted_setup =
            TrustedSetup::from_file(&config.trusted_setup_path, &expected_digest)
                .inspect_err(|_err| {
                    #[cfg(feature = "tracing")]
                    tracing::error!(error = %_err, "failed to load trusted setup");
                })?;

        Self::new(&trusted_setup)
            .with_encoding(config.field_encoding)
            .with_max_blobs_per_batch(config.max_blobs_per_batch)
    }

    /// Selects how pubdata is packed into field elements.
    #[must_use]
    pub fn with_encoding(mut self, encoding: FieldEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Limits the number of blobs a batch may use, at most [`MAX_BLOBS_PER_BLOCK`].
    pub fn with_max_blobs_per_batch(mut self, max_blobs_per_batch: usize) -> Result<Self, Error> {
        if max_blobs_per_batch == 0 || max_blobs_per_batch > MAX_BLOBS_PER_BLOCK {
            return Err(ConfigError::InvalidMaxBlobsPerBatch {
                value: max_blobs_per_batch,
                max: MAX_BLOBS_PER_BLOCK,
            }
            .into());
        }
        self.max_blobs_per_batch = max_blobs_per_batch;
        Ok(self)
    }

    pub const fn encoding(&self) -> FieldEncoding {
        self.encoding
    }

    pub const fn max_blobs_per_batch(&self) -> usize {
        self.max_blobs_per_batch
    }
}
