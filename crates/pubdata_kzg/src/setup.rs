use kzg_single_open::{prover::CommitKey, verifier::VerificationKey};
pub use trusted_setup::TrustedSetup;

/// The setup's Lagrange points are already in the natural order of the
/// domain, which is the order the commit key expects.
pub(crate) fn commit_key_from_setup(setup: &TrustedSetup) -> CommitKey {
    CommitKey::new(setup.g1_lagrange().to_vec())
}

pub(crate) fn verification_key_from_setup(setup: &TrustedSetup) -> VerificationKey {
    VerificationKey::new(
        setup.g1_monomial()[0],
        setup.g2_monomial()[0],
        setup.g2_monomial()[1],
    )
}
