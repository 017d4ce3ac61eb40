//! Arithmetic capability shared by the fixed-width and arbitrary-precision
//! strategies.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// The operations a Fibonacci strategy needs from its number type.
///
/// Values double as scratch storage: `mul_into` overwrites its destination
/// and may reuse the destination's allocation.
pub trait FibNum: Clone {
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// `self += rhs`
    fn add_assign_ref(&mut self, rhs: &Self);

    /// `*out = lhs * rhs`
    fn mul_into(out: &mut Self, lhs: &Self, rhs: &Self);
}

/// Wrapping arithmetic. Past `MAX_FIB_U64` the fixed-width strategies return
/// F(n) mod 2^64 rather than panicking, even with overflow checks enabled.
impl FibNum for u64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn add_assign_ref(&mut self, rhs: &Self) {
        *self = self.wrapping_add(*rhs);
    }

    #[inline]
    fn mul_into(out: &mut Self, lhs: &Self, rhs: &Self) {
        *out = lhs.wrapping_mul(*rhs);
    }
}

impl FibNum for BigUint {
    fn zero() -> Self {
        <BigUint as Zero>::zero()
    }

    fn one() -> Self {
        <BigUint as One>::one()
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        *self += rhs;
    }

    fn mul_into(out: &mut Self, lhs: &Self, rhs: &Self) {
        *out = lhs * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u64_wraps_instead_of_panicking() {
        let mut x = u64::MAX;
        x.add_assign_ref(&2);
        assert_eq!(x, 1);

        let mut out = 0u64;
        u64::mul_into(&mut out, &(1u64 << 63), &4);
        assert_eq!(out, 0);
    }

    #[test]
    fn biguint_mul_into_overwrites() {
        let mut out = BigUint::from(999u32);
        BigUint::mul_into(&mut out, &BigUint::from(6u32), &BigUint::from(7u32));
        assert_eq!(out, BigUint::from(42u32));
    }

    #[test]
    fn biguint_add_does_not_overflow() {
        let mut x = BigUint::from(u64::MAX);
        x.add_assign_ref(&BigUint::from(1u32));
        assert_eq!(x, BigUint::from(1u32) << 64u32);
    }

    #[test]
    fn identities() {
        assert_eq!(<u64 as FibNum>::zero(), 0);
        assert_eq!(<u64 as FibNum>::one(), 1);
        assert_eq!(<BigUint as FibNum>::zero(), BigUint::ZERO);
        assert_eq!(<BigUint as FibNum>::one(), BigUint::from(1u32));
    }
}
