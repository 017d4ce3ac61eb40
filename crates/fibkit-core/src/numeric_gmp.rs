//! `FibNum` for GMP integers via the `rug` crate.
//!
//! Only available when the `gmp` feature is enabled. Unlike `BigUint`,
//! `rug` can write a product into an existing allocation, so the matrix
//! scratch values are reused without reallocating.

use rug::{Assign, Integer};

use crate::iterative::iterative;
use crate::matrix::matrix;
use crate::numeric::FibNum;

impl FibNum for Integer {
    fn zero() -> Self {
        Integer::new()
    }

    fn one() -> Self {
        Integer::from(1)
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        *self += rhs;
    }

    fn mul_into(out: &mut Self, lhs: &Self, rhs: &Self) {
        out.assign(lhs * rhs);
    }
}

/// F(n) over GMP integers by linear iteration.
#[must_use]
pub fn fibonacci_iterative_gmp(n: u64) -> Integer {
    iterative(n)
}

/// F(n) over GMP integers by matrix exponentiation.
#[must_use]
pub fn fibonacci_matrix_gmp(n: u64) -> Integer {
    matrix(n)
}
