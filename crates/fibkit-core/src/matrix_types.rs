//! Working state for square-and-multiply matrix exponentiation.

use crate::numeric::FibNum;

/// Base matrix, accumulator vector, and the scratch values reused by every
/// step of the exponentiation loop.
pub(crate) struct MatrixState<T> {
    // Base matrix [[a, b], [c, d]], starting at Q = [[1, 1], [1, 0]].
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    // Row vector (rc, rd), starting at (0, 1). After multiplying by Q^k it
    // holds (F(k), F(k-1)).
    pub rc: T,
    pub rd: T,
    // Values of a, b, c (or rc) from before the current step.
    ta: T,
    tb: T,
    tc: T,
    // Product scratch.
    t1: T,
    t2: T,
}

impl<T: FibNum> MatrixState<T> {
    pub fn new() -> Self {
        Self {
            a: T::one(),
            b: T::one(),
            c: T::one(),
            d: T::zero(),
            rc: T::zero(),
            rd: T::one(),
            ta: T::zero(),
            tb: T::zero(),
            tc: T::zero(),
            t1: T::zero(),
            t2: T::zero(),
        }
    }

    /// `(rc, rd) <- (rc, rd) * [[a, b], [c, d]]`
    pub fn multiply_vector(&mut self) {
        let Self {
            a,
            b,
            c,
            d,
            rc,
            rd,
            tc,
            t1,
            t2,
            ..
        } = self;

        tc.clone_from(rc);
        // rc = rc*a + rd*c
        T::mul_into(t1, rc, a);
        T::mul_into(t2, rd, c);
        sum_into(rc, t1, t2);
        // rd = tc*b + rd*d
        T::mul_into(t1, tc, b);
        T::mul_into(t2, rd, d);
        sum_into(rd, t1, t2);
    }

    /// `[[a, b], [c, d]] <- [[a, b], [c, d]]^2`
    pub fn square_base(&mut self) {
        let Self {
            a,
            b,
            c,
            d,
            ta,
            tb,
            tc,
            t1,
            t2,
            ..
        } = self;

        ta.clone_from(a);
        tb.clone_from(b);
        tc.clone_from(c);
        // a = a*a + b*c
        T::mul_into(t1, a, a);
        T::mul_into(t2, b, c);
        sum_into(a, t1, t2);
        // b = ta*b + b*d
        T::mul_into(t1, ta, b);
        T::mul_into(t2, b, d);
        sum_into(b, t1, t2);
        // c = c*ta + d*c
        T::mul_into(t1, c, ta);
        T::mul_into(t2, d, c);
        sum_into(c, t1, t2);
        // d = tc*tb + d*d
        T::mul_into(t1, tc, tb);
        T::mul_into(t2, d, d);
        sum_into(d, t1, t2);
    }
}

/// `*out = *t1 + *t2`. The old value of `out` is left in `t1` so its
/// storage is recycled as scratch.
fn sum_into<T: FibNum>(out: &mut T, t1: &mut T, t2: &T) {
    std::mem::swap(out, t1);
    out.add_assign_ref(t2);
}
