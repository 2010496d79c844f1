use pairing::{MillerLoopResult, MultiMillerLoop};
use traits::*;

pub mod batch_inversion;
pub mod lincomb;

// Re-export ff and group, so other crates do not need to directly import(and independently version) them
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

/// Affine representation of a point in the BLS12-381 G1 curve group.
pub type G1Point = blstrs::G1Affine;

/// Projective representation of a point in the BLS12-381 G1 curve group.
pub type G1Projective = blstrs::G1Projective;

/// Affine representation of a point in the BLS12-381 G2 curve group.
pub type G2Point = blstrs::G2Affine;

/// Projective representation of a point in the BLS12-381 G2 curve group.
pub type G2Projective = blstrs::G2Projective;

/// Precomputed G2 point for pairing computations.
pub type G2Prepared = blstrs::G2Prepared;

/// Scalar field element for the BLS12-381 curve.
///
/// Every pubdata field element, evaluation point and evaluation value lives here.
pub type Scalar = blstrs::Scalar;

/// Checks whether the product of pairings over the given G1 × G2 pairs equals the identity.
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    blstrs::Bls12::multi_miller_loop(pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Converts projective points into affine points with a single shared inversion.
pub fn batch_normalize_points<T: PrimeCurveAffine>(points: &[T::Curve]) -> Vec<T>
where
    T::Curve: Curve<AffineRepr = T>,
{
    let mut affine_points = vec![T::identity(); points.len()];
    T::Curve::batch_normalize(points, &mut affine_points);
    affine_points
}

/// Converts G1 projective points to affine form.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    batch_normalize_points(projective_points)
}

/// Reduces a 32 byte big-endian integer modulo the scalar field order.
///
/// The result is biased since 2^256 is not a multiple of the modulus; callers
/// use it for Fiat-Shamir challenges where the bias is negligible.
#[allow(clippy::borrow_as_ptr)]
pub fn reduce_bytes_to_scalar_bias(bytes: [u8; 32]) -> Scalar {
    let mut out = blst::blst_fr::default();

    unsafe {
        // Convert byte array into a scalar
        let mut s = blst::blst_scalar::default();
        blst::blst_scalar_from_bendian(&mut s, &bytes as *const u8);
        // Convert scalar into a `blst_fr` reducing the value along the way
        blst::blst_fr_from_scalar(&mut out, std::ptr::addr_of!(s));
    }

    Scalar::from(out)
}

/// Interprets 32 big-endian bytes as a field element, rejecting values that
/// are not strictly less than the modulus.
pub fn scalar_from_bytes_be_canonical(bytes: &[u8; 32]) -> Option<Scalar> {
    Scalar::from_bytes_be(bytes).into()
}
