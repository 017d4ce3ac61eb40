//! Matrix exponentiation strategies.
//!
//! Computes F(n) as the first component of (0, 1) * Q^n with
//! Q = [[1,1],[1,0]], using binary (square-and-multiply) exponentiation:
//! O(log n) multiplications. All working values are allocated once per call.

use num_bigint::BigUint;

use crate::matrix_types::MatrixState;
use crate::numeric::FibNum;

/// Compute F(n) by exponentiating Q, consuming `n` from the low bit up.
pub fn matrix<T: FibNum>(mut n: u64) -> T {
    let mut state = MatrixState::<T>::new();

    while n > 0 {
        if n & 1 == 1 {
            state.multiply_vector();
        }
        state.square_base();
        n >>= 1;
    }

    state.rc
}

/// F(n) over `u64` in O(log n) multiplications.
///
/// Only exact for `n <= MAX_FIB_U64`; larger indices wrap silently.
#[must_use]
pub fn fibonacci_matrix_fixed(n: u64) -> u64 {
    matrix(n)
}

/// F(n) over `BigUint` in O(log n) multiplications.
#[must_use]
pub fn fibonacci_matrix_big(n: u64) -> BigUint {
    matrix(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterative::fibonacci_iterative_big;

    #[test]
    fn matrix_small_values() {
        let vals: Vec<u64> = (0..10).map(fibonacci_matrix_fixed).collect();
        assert_eq!(vals, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn matrix_fixed_last_exact_value() {
        assert_eq!(fibonacci_matrix_fixed(93), 12_200_160_415_121_876_738);
    }

    #[test]
    fn matrix_fixed_wraps_like_iterative() {
        // Both reduce F(94) mod 2^64 rather than panicking.
        assert_eq!(fibonacci_matrix_fixed(94), 1_293_530_146_158_671_551);
    }

    #[test]
    fn matrix_f200() {
        let expected =
            BigUint::parse_bytes(b"280571172992510140037611932413038677189525", 10).unwrap();
        assert_eq!(fibonacci_matrix_big(200), expected);
    }

    #[test]
    fn matrix_f1000() {
        let s = fibonacci_matrix_big(1000).to_string();
        assert!(s.starts_with("43466557686937456435688527675040625802564"));
        assert_eq!(s.len(), 209);
    }

    #[test]
    fn matrix_big_matches_iterative() {
        for n in 0..300 {
            assert_eq!(
                fibonacci_matrix_big(n),
                fibonacci_iterative_big(n),
                "mismatch at n={n}"
            );
        }
    }

    #[test]
    fn powers_of_two() {
        // Exponents with a single set bit exercise the vector update exactly once.
        assert_eq!(fibonacci_matrix_fixed(1), 1);
        assert_eq!(fibonacci_matrix_fixed(64), 10_610_209_857_723);
        assert_eq!(
            fibonacci_matrix_big(128),
            BigUint::parse_bytes(b"251728825683549488150424261", 10).unwrap()
        );
    }
}
