//! Dispatch thresholds and fixed-width limits.

/// Indices below this are computed with `u64` matrix exponentiation.
///
/// Tuned empirically; must not exceed `MAX_FIB_U64 + 1`.
pub const DEFAULT_FIXED_WIDTH_THRESHOLD: u64 = 92;

/// Indices at or above this are computed with `BigUint` matrix
/// exponentiation; indices between the two thresholds iterate over `BigUint`.
///
/// Empirical crossover point. Re-tune if the big-integer backend changes.
pub const DEFAULT_MATRIX_BIG_THRESHOLD: u64 = 177;

/// Largest index whose Fibonacci number fits in a `u64`.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = max_fib_index_u64();

const fn max_fib_index_u64() -> u64 {
    // a = F(n), b = F(n + 1)
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    let mut n: u64 = 0;
    while let Some(next) = a.checked_add(b) {
        a = b;
        b = next;
        n += 1;
    }
    n + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_fib_u64_is_93() {
        assert_eq!(MAX_FIB_U64, 93);
    }

    #[test]
    fn default_thresholds_are_ordered() {
        assert!(DEFAULT_FIXED_WIDTH_THRESHOLD <= MAX_FIB_U64 + 1);
        assert!(DEFAULT_FIXED_WIDTH_THRESHOLD < DEFAULT_MATRIX_BIG_THRESHOLD);
    }
}
