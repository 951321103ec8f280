//! Integer n-th roots by Newton's method.

use num_traits::Signed;

use crate::bigint::Sign;
use crate::error::Error;
use crate::BigInt;

/// The integer `n`-th root of `a`: the `x` with `x^n <= |a| < (x+1)^n`,
/// carrying the sign of `a`.
///
/// Newton iteration `x <- x - (x^n - a) / (n * x^(n-1))` from `x = 2`
/// until a fixed point, then a final walk down while `x^n > a`
/// (LibTomMath's `mp_n_root` shape). Not intended for huge `n`.
///
/// `n == 0` fails with [`Error::DivideByZero`]; an even `n` with negative
/// `a` fails with [`Error::NegativeArgument`].
pub fn nth_root(a: &BigInt, n: u32) -> Result<BigInt, Error> {
    if n == 0 {
        return Err(Error::DivideByZero);
    }
    if n & 1 == 0 && a.sign() == Sign::Minus {
        return Err(Error::NegativeArgument);
    }

    let t5 = a.abs();
    let mut t1;
    let mut t2 = BigInt::from(2u32);

    loop {
        t1 = t2.clone();

        // t2 = t1 - (t1^n - a) / (n * t1^(n-1))
        let t3 = t1.pow(u64::from(n) - 1);
        let num = &(&t1 * &t3) - &t5;
        let den = &t3 * n;
        let (q, _) = num.div_rem(&den)?;
        t2 = &t1 - &q;

        if t1 == t2 {
            break;
        }
    }

    // Newton may land a step high; settle onto the floor.
    while t1.pow(u64::from(n)) > t5 {
        t1 -= 1u32;
    }

    if a.sign() == Sign::Minus {
        t1 = -t1;
    }
    Ok(t1)
}

/// The integer square root.
pub fn sqrt(a: &BigInt) -> Result<BigInt, Error> {
    nth_root(a, 2)
}

impl BigInt {
    /// See [`nth_root`].
    pub fn nth_root(&self, n: u32) -> Result<BigInt, Error> {
        nth_root(self, n)
    }

    /// See [`sqrt`].
    pub fn sqrt(&self) -> Result<BigInt, Error> {
        sqrt(self)
    }
}
