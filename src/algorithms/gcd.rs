//! Binary GCD and the extended binary Euclidean algorithm.

use num_traits::{One, Signed, Zero};

use crate::bigint::Sign::*;
use crate::BigInt;

/// GCD returns the greatest common divisor of a and b.
///
/// Both inputs may be zero or negative; the result is always `>= 0`, with
/// `gcd(0, b) == |b|` and `gcd(0, 0) == 0`.
///
/// Stein's algorithm (HAC 14.54): strip the common power of two, keep both
/// operands odd by right-shifting, and replace the larger by half the
/// difference until one side vanishes.
pub fn gcd(a_in: &BigInt, b_in: &BigInt) -> BigInt {
    let mut u = a_in.abs();
    let mut v = b_in.abs();

    if u.is_zero() {
        return v;
    }
    if v.is_zero() {
        return u;
    }

    let k = u.trailing_zeros().min(v.trailing_zeros());
    u >>= k as usize;
    v >>= k as usize;

    while !u.is_zero() {
        let utz = u.trailing_zeros() as usize;
        u >>= utz;
        let vtz = v.trailing_zeros() as usize;
        v >>= vtz;

        if u >= v {
            u -= &v;
            u >>= 1;
        } else {
            v -= &u;
            v >>= 1;
        }
    }

    v << k as usize
}

/// XGCD returns `(z, y1, y2)` such that `z = gcd(a, b) = y1*a + y2*b`.
///
/// Allow the inputs a and b to be zero or negative with the following
/// definitions: z is always `>= 0`; if `a == b == 0` then
/// `z = y1 = y2 = 0`; if exactly one input is zero, its coefficient is
/// zero and the other is `±1`.
///
/// Binary extended Euclidean algorithm (HAC 14.61): the pairs `(u1, u2)`
/// and `(v1, v2)` keep `u = u1*a + u2*b` and `v = v1*a + v2*b` invariant
/// while `u` and `v` are halved and cross-subtracted. The coefficient
/// update before each halving keeps both coefficients even, so every
/// division by two is exact.
pub fn extended_gcd(a_in: &BigInt, b_in: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a_in.is_zero() && b_in.is_zero() {
        return (BigInt::zero(), BigInt::zero(), BigInt::zero());
    }
    if a_in.is_zero() {
        let y2 = if b_in.sign() == Minus {
            -BigInt::one()
        } else {
            BigInt::one()
        };
        return (b_in.abs(), BigInt::zero(), y2);
    }
    if b_in.is_zero() {
        let y1 = if a_in.sign() == Minus {
            -BigInt::one()
        } else {
            BigInt::one()
        };
        return (a_in.abs(), y1, BigInt::zero());
    }

    let mut ta = a_in.abs();
    let mut tb = b_in.abs();

    let mut shifts = 0u64;
    while ta.is_even() && tb.is_even() {
        ta >>= 1;
        tb >>= 1;
        shifts += 1;
    }

    let mut tu = ta.clone();
    let mut tv = tb.clone();

    let mut u1 = BigInt::one();
    let mut u2 = BigInt::zero();
    let mut v1 = BigInt::zero();
    let mut v2 = BigInt::one();

    loop {
        while tu.is_even() {
            tu >>= 1;

            if u1.is_odd() || u2.is_odd() {
                u1 += &tb;
                u2 -= &ta;
            }
            u1 >>= 1;
            u2 >>= 1;
        }

        while tv.is_even() {
            tv >>= 1;

            if v1.is_odd() || v2.is_odd() {
                v1 += &tb;
                v2 -= &ta;
            }
            v1 >>= 1;
            v2 >>= 1;
        }

        if tu.magnitude_cmp(&tv) != core::cmp::Ordering::Less {
            tu -= &tv;
            u1 -= &v1;
            u2 -= &v2;
        } else {
            tv -= &tu;
            v1 -= &u1;
            v2 -= &u2;
        }

        if tu.is_zero() {
            break;
        }
    }

    let gcd = tv << shifts as usize;

    // The run worked on |a| and |b|; fold the stripped signs back into
    // the coefficients.
    if a_in.sign() == Minus {
        v1 = -v1;
    }
    if b_in.sign() == Minus {
        v2 = -v2;
    }

    (gcd, v1, v2)
}

/// LCM returns the least common multiple of `|a|` and `|b|`; zero if
/// either input is zero.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    let g = gcd(a, b);

    // Divide the smaller magnitude by the gcd before multiplying.
    if a.magnitude_cmp(b) == core::cmp::Ordering::Less {
        &(&a.abs() / &g) * &b.abs()
    } else {
        &(&b.abs() / &g) * &a.abs()
    }
}

impl BigInt {
    /// See [`gcd`].
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        gcd(self, other)
    }

    /// See [`lcm`].
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        lcm(self, other)
    }
}
