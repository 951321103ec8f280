use num_traits::Signed;

use crate::algorithms::{extended_gcd, mod_inverse};
use crate::error::Error;
use crate::BigInt;

/// Generic trait for modular multiplicative inverse.
///
/// Computes the [modular multiplicative inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse)
/// of an integer *a* modulo *m*, normalised into `[0, m)`.
///
/// Fails with [`Error::NoInverse`] when `gcd(a, m) != 1`. Unlike the bare
/// [`mod_inverse`] function, a negative *a* is first reduced into the
/// modulus range.
pub trait ModInverse<R: Sized>: Sized {
    /// The output type of the modular inverse.
    type Output: Sized;

    /// Returns the modular inverse of `self` modulo `m`.
    fn mod_inverse(self, m: R) -> Result<Self::Output, Error>;
}

/// Generic trait for the extended Euclidean algorithm.
///
/// Computes the [extended GCD](https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm),
/// returning `(gcd, x, y)` such that `self * x + other * y = gcd`.
pub trait ExtendedGcd<R: Sized>: Sized {
    /// Returns `(gcd, x, y)` such that `self * x + other * y = gcd`.
    fn extended_gcd(self, other: R) -> (BigInt, BigInt, BigInt);
}

// --- ModInverse impls ---

impl ModInverse<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigInt) -> Result<BigInt, Error> {
        let modulus = m.abs();
        if self.is_negative() {
            mod_inverse(&self.rem_euclid(&modulus)?, &modulus)
        } else {
            mod_inverse(self, &modulus)
        }
    }
}

impl ModInverse<BigInt> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: BigInt) -> Result<BigInt, Error> {
        ModInverse::mod_inverse(&self, &m)
    }
}

impl ModInverse<&BigInt> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigInt) -> Result<BigInt, Error> {
        ModInverse::mod_inverse(&self, m)
    }
}

// --- ExtendedGcd impls ---

impl ExtendedGcd<&BigInt> for &BigInt {
    fn extended_gcd(self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(self, other)
    }
}

impl ExtendedGcd<BigInt> for BigInt {
    fn extended_gcd(self, other: BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(&self, &other)
    }
}

impl ExtendedGcd<&BigInt> for BigInt {
    fn extended_gcd(self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(&self, other)
    }
}
