use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{BYTES_PER_HASH, MAX_BLOBS_PER_BATCH, MAX_BLOBS_PER_BLOCK},
    encoder::FieldEncoding,
    ConfigError,
};

/// Runtime configuration of a [`crate::Context`].
///
/// ```json
/// {
///   "trusted_setup_path": "trusted_setup_4096.json",
///   "trusted_setup_sha256": "0x…",
///   "max_blobs_per_batch": 2,
///   "field_encoding": "canonical32"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the trusted setup in the Ethereum JSON format.
    pub trusted_setup_path: PathBuf,
    /// Expected SHA-256 of the trusted setup file, hex encoded.
    ///
    /// [`crate::Context::from_config`] refuses to load a setup without it.
    #[serde(default)]
    pub trusted_setup_sha256: Option<String>,
    #[serde(default = "default_max_blobs_per_batch")]
    pub max_blobs_per_batch: usize,
    #[serde(default)]
    pub field_encoding: FieldEncoding,
}

const fn default_max_blobs_per_batch() -> usize {
    MAX_BLOBS_PER_BATCH
}

impl Config {
    /// Configuration for the setup at `trusted_setup_path` whose file hashes
    /// to `trusted_setup_sha256` (hex, optionally `0x` prefixed).
    pub fn new(
        trusted_setup_path: impl Into<PathBuf>,
        trusted_setup_sha256: impl Into<String>,
    ) -> Self {
        Self {
            trusted_setup_path: trusted_setup_path.into(),
            trusted_setup_sha256: Some(trusted_setup_sha256.into()),
            max_blobs_per_batch: MAX_BLOBS_PER_BATCH,
            field_encoding: FieldEncoding::default(),
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Json(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_blobs_per_batch == 0 || self.max_blobs_per_batch > MAX_BLOBS_PER_BLOCK {
            return Err(ConfigError::InvalidMaxBlobsPerBatch {
                value: self.max_blobs_per_batch,
                max: MAX_BLOBS_PER_BLOCK,
            });
        }
        self.trusted_setup_digest()?;
        Ok(())
    }

    /// The decoded expected digest of the trusted setup file, if one is configured.
    pub fn trusted_setup_digest(&self) -> Result<Option<[u8; BYTES_PER_HASH]>, ConfigError> {
        let Some(digest) = &self.trusted_setup_sha256 else {
            return Ok(None);
        };

        let digest_hex = digest.strip_prefix("0x").unwrap_or(digest);
        let mut bytes = [0u8; BYTES_PER_HASH];
        hex::decode_to_slice(digest_hex, &mut bytes)
            .map_err(|_| ConfigError::InvalidSetupDigest(digest.clone()))?;
        Ok(Some(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_filled_in() {
        let json = format!(
            r#"{{"trusted_setup_path": "setup.json", "trusted_setup_sha256": "{}"}}"#,
            "cd".repeat(32)
        );
        let config = Config::from_json(&json).unwrap();
        assert_eq!(config, Config::new("setup.json", "cd".repeat(32)));
        assert_eq!(config.trusted_setup_digest(), Ok(Some([0xcd; 32])));
    }

    #[test]
    fn missing_digest_parses_but_is_reported() {
        let config = Config::from_json(r#"{"trusted_setup_path": "setup.json"}"#).unwrap();
        assert_eq!(config.trusted_setup_digest(), Ok(None));
    }

    #[test]
    fn all_fields_parse() {
        let json = format!(
            r#"{{
                "trusted_setup_path": "/etc/setup.json",
                "trusted_setup_sha256": "0x{}",
                "max_blobs_per_batch": 1,
                "field_encoding": "safe31"
            }}"#,
            "ab".repeat(32)
        );
        let config = Config::from_json(&json).unwrap();

        assert_eq!(config.max_blobs_per_batch, 1);
        assert_eq!(config.field_encoding, FieldEncoding::Safe31);
        assert_eq!(config.trusted_setup_digest(), Ok(Some([0xab; 32])));
    }

    #[test]
    fn too_many_blobs_are_rejected() {
        let json = r#"{"trusted_setup_path": "s.json", "max_blobs_per_batch": 3}"#;
        assert_eq!(
            Config::from_json(json),
            Err(ConfigError::InvalidMaxBlobsPerBatch {
                value: 3,
                max: MAX_BLOBS_PER_BLOCK
            })
        );

        let json = r#"{"trusted_setup_path": "s.json", "max_blobs_per_batch": 0}"#;
        assert!(Config::from_json(json).is_err());
    }

    #[test]
    fn malformed_digest_is_rejected() {
        let json = r#"{"trusted_setup_path": "s.json", "trusted_setup_sha256": "0x1234"}"#;
        assert_eq!(
            Config::from_json(json),
            Err(ConfigError::InvalidSetupDigest("0x1234".to_string()))
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{"trusted_setup_path": "s.json", "max_blobs": 1}"#;
        assert!(matches!(Config::from_json(json), Err(ConfigError::Json(_))));
    }
}
