use ff::Field;

/// Replaces every element of `v` with its inverse using Montgomery's trick:
/// one field inversion plus three multiplications per element.
///
/// Panics if any of the elements are zero.
pub fn batch_inverse<F: Field>(v: &mut [F]) {
    if v.is_empty() {
        return;
    }

    // prefix[i] = v_0 * ... * v_{i-1}
    let mut prefix = Vec::with_capacity(v.len());
    let mut acc = F::ONE;
    for f in v.iter() {
        prefix.push(acc);
        acc *= f;
    }

    let mut acc_inv = acc
        .invert()
        .expect("batch_inverse called with a zero element");

    // Walking backwards, acc_inv = (v_0 * ... * v_i)^{-1} at step i.
    for (f, prefix) in v.iter_mut().zip(prefix).rev() {
        let inverse = acc_inv * prefix;
        acc_inv *= *f;
        *f = inverse;
    }
}
