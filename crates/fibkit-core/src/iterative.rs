//! Linear-time iterative strategies.
//!
//! O(n) additions on the pair (F(k), F(k+1)), updated in place.

use num_bigint::BigUint;

use crate::numeric::FibNum;

/// Compute F(n) by `n` steps of `(a, b) <- (b, a + b)` from `(0, 1)`.
pub fn iterative<T: FibNum>(n: u64) -> T {
    let mut a = T::zero();
    let mut b = T::one();
    for _ in 0..n {
        a.add_assign_ref(&b);
        std::mem::swap(&mut a, &mut b);
    }
    a
}

/// F(n) over `u64`.
///
/// Only exact for `n <= MAX_FIB_U64`; larger indices wrap silently.
#[must_use]
pub fn fibonacci_iterative_fixed(n: u64) -> u64 {
    iterative(n)
}

/// F(n) over `BigUint`.
#[must_use]
pub fn fibonacci_iterative_big(n: u64) -> BigUint {
    iterative(n)
}
