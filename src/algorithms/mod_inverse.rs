//! Modular multiplicative inverse.

use num_traits::One;

use crate::bigint::Sign;
use crate::error::Error;
use crate::BigInt;

use super::extended_gcd;

/// The inverse of `a` modulo `m`, normalised into `[0, m)`.
///
/// Both operands must be non-negative. Fails with [`Error::NoInverse`]
/// when `gcd(a, m) != 1` (HAC 14.61/14.64).
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    if a.sign() == Sign::Minus || m.sign() == Sign::Minus {
        return Err(Error::NegativeArgument);
    }

    let (g, y1, _) = extended_gcd(a, m);
    if !g.is_one() {
        return Err(Error::NoInverse);
    }

    // The Bezout coefficient of a may be negative; bring it into range.
    y1.rem_euclid(m)
}

impl BigInt {
    /// See [`mod_inverse`].
    pub fn mod_inverse(&self, m: &BigInt) -> Result<BigInt, Error> {
        mod_inverse(self, m)
    }
}
