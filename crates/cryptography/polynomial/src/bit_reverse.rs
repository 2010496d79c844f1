/// Reverses the lowest `bits` bits of `n`.
pub const fn reverse_bits(n: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    n.reverse_bits() >> (usize::BITS - bits)
}

/// Permutes `a` so that the element at index `i` moves to index `reverse_bits(i)`.
///
/// Blobs store their evaluations in bit-reversed order of the roots of unity;
/// applying this permutation converts between that order and the natural one.
/// The permutation is its own inverse.
///
/// Panics if the length of `a` is not a power of two.
pub fn bitreverse_slice<T>(a: &mut [T]) {
    if a.is_empty() {
        return;
    }

    let n = a.len();
    assert!(n.is_power_of_two(), "length {n} is not a power of two");
    let log_n = n.ilog2();

    for k in 0..n {
        let rk = reverse_bits(k, log_n);
        if k < rk {
            a.swap(rk, k);
        }
    }
}
