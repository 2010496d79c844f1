use crate::{traits::*, G1Point, G1Projective, Scalar};

/// Multi-scalar multiplication over G1.
///
/// Returns `None` if the points and the scalars are not the same length.
///
/// Note: "unchecked" refers to the fact that blst returns the identity element
/// if any of the points is the identity. Callers must have filtered them out.
pub fn g1_lincomb_unchecked(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    (points.len() == scalars.len()).then(|| {
        // Convert to Projective, since the API forces us to do this
        let proj_points: Vec<_> = points.iter().map(Into::into).collect();
        G1Projective::multi_exp(&proj_points, scalars)
    })
}

/// Multi-scalar multiplication over G1 which tolerates identity points.
///
/// Returns `None` if the points and the scalars are not the same length.
///
/// Pairs whose point is the identity or whose scalar is zero contribute nothing
/// and are dropped before calling into blst.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = points.len())))]
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    if points.len() != scalars.len() {
        return None;
    }

    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, scalar)| !bool::from(point.is_identity()) && !scalar.is_zero_vartime())
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    if points_filtered.is_empty() {
        Some(G1Projective::identity())
    } else {
        g1_lincomb_unchecked(&points_filtered, &scalars_filtered)
    }
}
