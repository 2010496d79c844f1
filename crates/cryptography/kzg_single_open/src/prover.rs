use bls12_381::{batch_inversion::batch_inverse, lincomb::g1_lincomb, traits::*, G1Point, Scalar};
use maybe_rayon::prelude::*;
use polynomial::domain::Domain;

/// The key that is used to commit to polynomials in Lagrange form.
///
/// `g1_lagrange[i]` is `[L_i(τ)]G₁` where `L_i` is the i'th Lagrange basis
/// polynomial of the domain, in natural (not bit-reversed) order.
#[derive(Debug, Clone)]
pub struct CommitKey {
    pub g1_lagrange: Vec<G1Point>,
}

impl CommitKey {
    pub const fn new(g1_lagrange: Vec<G1Point>) -> Self {
        Self { g1_lagrange }
    }

    /// Commits to a polynomial given by its evaluations over the domain.
    ///
    /// Returns `None` if the number of evaluations does not match the key size.
    pub fn commit_lagrange(&self, evaluations: &[Scalar]) -> Option<G1Point> {
        g1_lincomb(&self.g1_lagrange, evaluations).map(|commitment| commitment.to_affine())
    }
}

#[derive(Debug)]
pub struct Prover {
    /// Domain used to create the opening proofs.
    pub domain: Domain,
    /// Commitment key used for committing to the polynomial
    /// in lagrange form
    pub commit_key: CommitKey,
}

impl Prover {
    pub fn new(domain_size: usize, commit_key: CommitKey) -> Self {
        let domain = Domain::new(domain_size);
        assert_eq!(
            domain.size(),
            commit_key.g1_lagrange.len(),
            "commit key size must match the domain size"
        );
        Self { domain, commit_key }
    }

    /// Commits to the polynomial with the given evaluations in natural order.
    ///
    /// Panics if the number of evaluations is not the domain size.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn commit(&self, polynomial: &[Scalar]) -> G1Point {
        self.commit_key
            .commit_lagrange(polynomial)
            .expect("polynomial.len() == commit_key.g1_lagrange.len()")
    }

    /// Computes `y = f(z)` and the opening proof `[q(τ)]G₁` where
    /// `q(X) = (f(X) - y) / (X - z)`.
    ///
    /// The polynomial is given by its evaluations in natural order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_kzg_proof(&self, polynomial: &[Scalar], z: Scalar) -> (G1Point, Scalar) {
        let (y, quotient) = compute_evaluation_and_quotient(&self.domain, polynomial, z);

        let proof = {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("commit quotient").entered();
            self.commit(&quotient)
        };

        (proof, y)
    }
}

/// Compute evaluation and quotient of the given polynomial at the given point.
///
/// Note: The polynomial and the returned quotient are both in natural order.
pub fn compute_evaluation_and_quotient(
    domain: &Domain,
    polynomial: &[Scalar],
    z: Scalar,
) -> (Scalar, Vec<Scalar>) {
    assert_eq!(polynomial.len(), domain.size());

    domain.root_index(&z).map_or_else(
        || compute_evaluation_and_quotient_out_of_domain(domain, polynomial, z),
        |point_idx| compute_evaluation_and_quotient_within_domain(domain, polynomial, point_idx),
    )
}

/// Compute evaluation and quotient of the given polynomial at the given point.
/// The point is guaranteed to be out-of-domain.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
fn compute_evaluation_and_quotient_out_of_domain(
    domain: &Domain,
    polynomial: &[Scalar],
    z: Scalar,
) -> (Scalar, Vec<Scalar>) {
    // 1 / (z - ω^i)
    let mut denoms: Vec<_> = domain.roots.iter().map(|root| z - root).collect();
    batch_inverse(&mut denoms);

    let domain_size = domain.size() as u64;

    // \sum (ω^i * f(ω^i) / (z - ω^i)) * ((z^n - 1) / n)
    //
    // Accumulated sequentially, matching `Domain::evaluate_lagrange_form`.
    let y = domain
        .roots
        .iter()
        .zip(polynomial)
        .zip(&denoms)
        .fold(Scalar::ZERO, |acc, ((root, f_root), denom)| {
            acc + *root * f_root * denom
        })
        * (z.pow_vartime([domain_size]) - Scalar::ONE)
        * domain.domain_size_inv;

    // (y - f(ω^i)) / (z - ω^i)
    let quotient = denoms
        .maybe_into_par_iter()
        .zip(polynomial)
        .map(|(denom, f_root)| (y - f_root) * denom)
        .collect();

    (y, quotient)
}

/// Compute evaluation and quotient of the given polynomial at the domain
/// point `ω^m` with `m = point_idx`.
///
/// For more details, read [PCS multiproofs using random evaluation] section
/// "Dividing when one of the points is zero".
///
/// [PCS multiproofs using random evaluation]: https://dankradfeist.de/ethereum/2021/06/18/pcs-multiproofs.html
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
fn compute_evaluation_and_quotient_within_domain(
    domain: &Domain,
    polynomial: &[Scalar],
    point_idx: usize,
) -> (Scalar, Vec<Scalar>) {
    let domain_size = domain.size();

    // ω^m
    let z = domain.roots[point_idx];

    // f(ω^m)
    let y = polynomial[point_idx];

    // 1 / (ω^m - ω^j)
    // Note that we set (ω^m - ω^m) to be one to make the later `batch_inverse` work.
    let mut denoms: Vec<_> = domain
        .roots
        .iter()
        .enumerate()
        .map(|(idx, root)| if idx == point_idx { Scalar::ONE } else { z - root })
        .collect();
    batch_inverse(&mut denoms);

    // (f(ω^m) - f(ω^j)) / (ω^m - ω^j)
    let mut quotient: Vec<_> = denoms
        .maybe_into_par_iter()
        .zip(polynomial)
        .map(|(denom, f_root)| (y - f_root) * denom)
        .collect();

    // q(ω^m) = \sum q(ω^j) * (A'(ω^m) / A'(ω^j)) = -\sum_{j != m} q(ω^j) * ω^{j - m}
    quotient[point_idx] = Scalar::ZERO;
    quotient[point_idx] = -quotient
        .iter()
        .enumerate()
        .fold(Scalar::ZERO, |acc, (idx, q_j)| {
            let root_j_minus_m = domain.roots[(domain_size + idx - point_idx) % domain_size];
            acc + *q_j * root_j_minus_m
        });

    (y, quotient)
}

#[cfg(test)]
mod tests {
    use bls12_381::{traits::*, Scalar};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn random_polynomial(size: usize, seed: u64) -> Vec<Scalar> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..size).map(|_| Scalar::random(&mut rng)).collect()
    }

    /// Checks `q(ω^i) * (ω^i - z) == f(ω^i) - y` on every domain point.
    fn assert_quotient_identity(domain: &Domain, f: &[Scalar], z: Scalar, y: Scalar, q: &[Scalar]) {
        for ((root, f_i), q_i) in domain.roots.iter().zip(f).zip(q) {
            assert_eq!(*q_i * (*root - z), *f_i - y);
        }
    }

    #[test]
    fn out_of_domain_evaluation_matches_barycentric() {
        let domain = Domain::new(32);
        let polynomial = random_polynomial(32, 1);
        let z = Scalar::from(0xdead_beef_u64);

        let (y, quotient) = compute_evaluation_and_quotient(&domain, &polynomial, z);

        assert_eq!(y, domain.evaluate_lagrange_form(&polynomial, &z));
        assert_quotient_identity(&domain, &polynomial, z, y, &quotient);
    }

    #[test]
    fn within_domain_evaluation_is_lookup() {
        let domain = Domain::new(32);
        let polynomial = random_polynomial(32, 2);
        let z = domain.roots[5];

        let (y, quotient) = compute_evaluation_and_quotient(&domain, &polynomial, z);

        assert_eq!(y, polynomial[5]);
        // The identity holds trivially at ω^5, so check the rest and that the
        // quotient agrees with an evaluation of q at ω^5 taken from another point.
        assert_quotient_identity(&domain, &polynomial, z, y, &quotient);

        let probe = Scalar::from(77u64);
        let q_at_probe = domain.evaluate_lagrange_form(&quotient, &probe);
        let f_at_probe = domain.evaluate_lagrange_form(&polynomial, &probe);
        assert_eq!(q_at_probe * (probe - z), f_at_probe - y);
    }
}
