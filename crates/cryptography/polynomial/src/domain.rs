use bls12_381::{
    batch_inversion::batch_inverse,
    ff::{Field, PrimeField},
    Scalar,
};

/// A multiplicative subgroup of roots of unity `{ω^0, ω^1, ..., ω^(n-1)}`.
///
/// A blob is the list of evaluations of its polynomial over such a domain, so
/// the domain is all we need to evaluate that polynomial anywhere else.
#[derive(Debug, Clone)]
pub struct Domain {
    /// Roots of unity in natural order.
    pub roots: Vec<Scalar>,
    /// Size of the domain as a scalar
    pub domain_size: Scalar,
    /// Inverse of the domain size as a scalar
    pub domain_size_inv: Scalar,
    /// Generator for this domain
    // Element has order `domain_size`
    pub generator: Scalar,
}

impl Domain {
    pub fn new(size: usize) -> Self {
        // We are using roots of unity, so the
        // size of the domain will be padded to
        // the next power of two
        let size = size.next_power_of_two();

        let generator = Self::compute_generator_for_size(size);

        let domain_size = Scalar::from(size as u64);
        let domain_size_inv = domain_size.invert().expect("size should not be zero");

        let mut roots = Vec::with_capacity(size);
        let mut current = Scalar::ONE;
        for _ in 0..size {
            roots.push(current);
            current *= generator;
        }

        Self {
            roots,
            domain_size,
            domain_size_inv,
            generator,
        }
    }

    /// Computes an n'th root of unity for a given `n`
    fn compute_generator_for_size(size: usize) -> Scalar {
        assert!(size.is_power_of_two());

        let log_size_of_group = size.trailing_zeros();
        assert!(
            log_size_of_group <= Self::two_adicity(),
            "two adicity is 32 but group size needed is 2^{log_size_of_group}"
        );

        // We now want to compute the generator which has order `size`
        let exponent: u64 = 1 << (u64::from(Self::two_adicity()) - u64::from(log_size_of_group));

        Self::largest_root_of_unity().pow_vartime([exponent])
    }

    /// The largest root of unity that we can use for the domain
    const fn largest_root_of_unity() -> Scalar {
        Scalar::ROOT_OF_UNITY
    }

    /// The largest power of two that we can use for the domain
    const fn two_adicity() -> u32 {
        Scalar::S
    }

    /// The size of the domain
    ///
    /// Note: This is always a power of two
    pub fn size(&self) -> usize {
        self.roots.len()
    }

    /// Returns the index `i` such that `ω^i == z`, if `z` lies in the domain.
    pub fn root_index(&self, z: &Scalar) -> Option<usize> {
        self.roots.iter().position(|root| root == z)
    }

    /// Evaluates every Lagrange basis polynomial `L_i` of the domain at `z`.
    ///
    /// For `z` outside the domain:
    ///
    /// ```text
    /// L_i(z) = (z^n - 1) / n * ω^i / (z - ω^i)
    /// ```
    ///
    /// For `z = ω^m` the result is the m'th unit vector.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn lagrange_basis_evaluations(&self, z: &Scalar) -> Vec<Scalar> {
        if let Some(index) = self.root_index(z) {
            let mut unit = vec![Scalar::ZERO; self.size()];
            unit[index] = Scalar::ONE;
            return unit;
        }

        // 1 / (z - ω^i)
        let mut denoms: Vec<_> = self.roots.iter().map(|root| *z - root).collect();
        batch_inverse(&mut denoms);

        // (z^n - 1) / n
        let vanishing_over_n =
            (z.pow_vartime([self.size() as u64]) - Scalar::ONE) * self.domain_size_inv;

        self.roots
            .iter()
            .zip(denoms)
            .map(|(root, denom)| vanishing_over_n * root * denom)
            .collect()
    }

    /// Evaluates the polynomial with the given evaluations (in natural order
    /// over the domain) at an arbitrary point `z`, using the barycentric formula.
    ///
    /// Panics if the number of evaluations does not match the domain size.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn evaluate_lagrange_form(&self, evaluations: &[Scalar], z: &Scalar) -> Scalar {
        assert_eq!(
            evaluations.len(),
            self.size(),
            "number of evaluations must equal the domain size"
        );

        if let Some(index) = self.root_index(z) {
            return evaluations[index];
        }

        self.lagrange_basis_evaluations(z)
            .into_iter()
            .zip(evaluations)
            .fold(Scalar::ZERO, |acc, (basis, eval)| acc + basis * eval)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn horner(coefficients: &[Scalar], x: &Scalar) -> Scalar {
        coefficients
            .iter()
            .rev()
            .fold(Scalar::ZERO, |acc, coeff| acc * x + coeff)
    }

    #[test]
    fn largest_root_of_unity_has_correct_order() {
        let root = Domain::largest_root_of_unity();
        let order = 2u64.pow(Domain::two_adicity());

        assert_eq!(root.pow_vartime([order]), Scalar::ONE);

        // Check that it is indeed a primitive root of unity
        for i in 0..Domain::two_adicity() {
            assert_ne!(root.pow_vartime([2u64.pow(i)]), Scalar::ONE);
        }
    }

    #[test]
    fn domain_is_padded_to_power_of_two() {
        let domain = Domain::new(5);
        assert_eq!(domain.size(), 8);
        assert_eq!(domain.generator.pow_vartime([8u64]), Scalar::ONE);
        assert_eq!(domain.domain_size * domain.domain_size_inv, Scalar::ONE);
    }

    #[test]
    fn root_index_finds_domain_points() {
        let domain = Domain::new(16);
        for (i, root) in domain.roots.iter().enumerate() {
            assert_eq!(domain.root_index(root), Some(i));
        }
        assert_eq!(domain.root_index(&Scalar::from(2u64)), None);
    }

    #[test]
    fn lagrange_basis_sums_to_one() {
        let domain = Domain::new(32);
        let z = Scalar::from(123_456u64);

        let sum: Scalar = domain.lagrange_basis_evaluations(&z).into_iter().sum();
        assert_eq!(sum, Scalar::ONE);
    }

    #[test]
    fn barycentric_evaluation_matches_coefficient_form() {
        let mut rng = StdRng::seed_from_u64(99);
        let domain = Domain::new(64);

        let coefficients: Vec<_> = (0..64).map(|_| Scalar::random(&mut rng)).collect();
        let evaluations: Vec<_> = domain
            .roots
            .iter()
            .map(|root| horner(&coefficients, root))
            .collect();

        // Outside of the domain
        let z = Scalar::random(&mut rng);
        assert_eq!(
            domain.evaluate_lagrange_form(&evaluations, &z),
            horner(&coefficients, &z)
        );

        // On the domain
        let z = domain.roots[17];
        assert_eq!(domain.evaluate_lagrange_form(&evaluations, &z), evaluations[17]);
    }

    #[test]
    #[should_panic]
    fn evaluation_rejects_wrong_length() {
        let domain = Domain::new(8);
        domain.evaluate_lagrange_form(&[Scalar::ONE; 4], &Scalar::ONE);
    }
}
