mod errors;
pub use errors::VerifierError;

pub mod prover;
pub mod verifier;
