#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use bls12_381::Scalar;
use pubdata_kzg::{Config, Context, TrustedSetup};

/// Secret behind [`trusted_setup`].
pub const INSECURE_SECRET: u64 = 0x1234_5678;

/// The Ethereum KZG ceremony output for 4096 element blobs, in the JSON format.
pub const ETHEREUM_SETUP_PATH: &str = "../../test_vectors/trusted_setup_4096.json";
pub const ETHEREUM_SETUP_SHA256: &str =
    "98f0f6925dccecd4bf9872cefbb01b677cc5c31ebcc7e6e5cfa17ce0da949f4e";

/// A setup generated from a public secret. Never use it outside of tests.
pub fn trusted_setup() -> &'static TrustedSetup {
    static SETUP: OnceLock<TrustedSetup> = OnceLock::new();
    SETUP.get_or_init(|| TrustedSetup::insecure_from_secret(&Scalar::from(INSECURE_SECRET)))
}

/// A context over the Ethereum ceremony, loaded through the config path.
pub fn ethereum_context() -> Arc<Context> {
    static CONTEXT: OnceLock<Arc<Context>> = OnceLock::new();
    CONTEXT
        .get_or_init(|| {
            let config = Config::new(ETHEREUM_SETUP_PATH, ETHEREUM_SETUP_SHA256);
            Arc::new(Context::from_config(&config).expect("ethereum trusted setup must load"))
        })
        .clone()
}

pub fn context() -> Arc<Context> {
    static CONTEXT: OnceLock<Arc<Context>> = OnceLock::new();
    CONTEXT
        .get_or_init(|| Arc::new(Context::new(trusted_setup())))
        .clone()
}

/// Deterministic pubdata whose 32 byte chunks are all below the field modulus.
pub fn pattern_pubdata(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 0x70) as u8).collect()
}
